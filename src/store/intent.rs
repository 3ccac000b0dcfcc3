use crate::mvi::Intent;
use crate::resource::ResourceIntent;
use crate::session::SessionIntent;

/// Events accepted by the aggregate store. Every variant targets one slice,
/// except `Reset`, which clears them all.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    Resource(ResourceIntent),
    Session(SessionIntent),
    Reset,
}

impl Intent for AppIntent {}

impl From<ResourceIntent> for AppIntent {
    fn from(intent: ResourceIntent) -> Self {
        Self::Resource(intent)
    }
}

impl From<SessionIntent> for AppIntent {
    fn from(intent: SessionIntent) -> Self {
        Self::Session(intent)
    }
}
