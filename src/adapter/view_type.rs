use serde::Serialize;

use crate::error::RenderError;

/// Discriminator the host uses to pick which slot shape to create or reuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Image = 0,
    Switch = 1,
    Text = 2,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Image, ViewType::Switch, ViewType::Text];

    /// The raw tag handed to the host.
    pub fn tag(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ViewType {
    type Error = RenderError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Image),
            1 => Ok(Self::Switch),
            2 => Ok(Self::Text),
            other => Err(RenderError::UnrecognizedViewType(other)),
        }
    }
}
