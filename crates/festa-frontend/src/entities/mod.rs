use gpui::Entity;

pub mod countdown_entity;
pub mod devices_entity;
pub mod download_entity;
pub mod party_entity;
pub mod playback_entity;
pub mod settings_entity;

/// The entities every view hangs off of. Cloned freely; the entities inside
/// are shared handles.
#[derive(Debug, Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub playback: Entity<playback_entity::PlaybackEntity>,
    pub countdown: Entity<countdown_entity::CountdownEntity>,
    pub download: Entity<download_entity::DownloadEntity>,
    pub devices: Entity<devices_entity::OutputDevicesEntity>,
    pub party: Entity<party_entity::PartyEntity>,
}
