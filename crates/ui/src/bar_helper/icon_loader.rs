use bevy::asset::LoadState;
use bevy::prelude::*;

/// Turns an icon asset path into a loadable handle.
///
/// Implementations return `None` instead of failing when a path cannot be
/// resolved.
pub trait IconLoader {
    type Handle;

    fn load_icon(&self, path: &str) -> Option<Self::Handle>;
}

impl IconLoader for AssetServer {
    type Handle = Handle<Image>;

    /// Loading is asynchronous, so the first request for a missing file still
    /// yields a handle. Once that load has failed, later requests for the
    /// same path return `None`. A failed path is not retried.
    fn load_icon(&self, path: &str) -> Option<Handle<Image>> {
        if path.is_empty() {
            return None;
        }
        if let Some(existing) = self.get_handle::<Image>(path) {
            if matches!(self.get_load_state(existing.id()), Some(LoadState::Failed(_))) {
                return None;
            }
            return Some(existing);
        }
        Some(self.load(path.to_owned()))
    }
}
