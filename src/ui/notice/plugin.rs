// src/ui/notice/plugin.rs
//
// NoticePlugin coordinates notice banner systems and resources.

use bevy::prelude::*;

use super::components::{NoticeSettings, NoticeTracker};
use super::events::NoticeEvent;
use super::systems::{spawn_notice_banner, update_notice_banner};

pub struct NoticePlugin;

impl Plugin for NoticePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NoticeSettings>()
            .init_resource::<NoticeTracker>()
            .add_event::<NoticeEvent>()
            .add_systems(
                Update,
                (
                    spawn_notice_banner,
                    update_notice_banner.after(spawn_notice_banner),
                ),
            );
    }
}
