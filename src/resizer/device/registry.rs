//! Subdev registration seam.

use std::ops::BitOr;

use tracing::debug;

use crate::resizer::common::error::{ResizerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadFlags(u32);

impl PadFlags {
    pub const SINK: Self = Self(1 << 0);
    pub const SOURCE: Self = Self(1 << 1);
    pub const MUST_CONNECT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PadFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityFunction {
    VideoScaler,
}

/// What a resizer asks the media framework to expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdevDescriptor {
    pub name: String,
    pub function: EntityFunction,
    pub pads: [PadFlags; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubdevHandle(pub u32);

/// Media framework the resizer subdevs are published to.
pub trait SubdevRegistry {
    fn register_subdev(&mut self, desc: &SubdevDescriptor) -> Result<SubdevHandle>;
    fn unregister_subdev(&mut self, handle: SubdevHandle);
}

/// Registry kept in process memory. Names must be unique.
#[derive(Debug, Default)]
pub struct LocalRegistry {
    entries: Vec<(SubdevHandle, SubdevDescriptor)>,
    next: u32,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, desc)| desc.name.as_str()).collect()
    }

    pub fn get(&self, handle: SubdevHandle) -> Option<&SubdevDescriptor> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, desc)| desc)
    }
}

impl SubdevRegistry for LocalRegistry {
    fn register_subdev(&mut self, desc: &SubdevDescriptor) -> Result<SubdevHandle> {
        if self.entries.iter().any(|(_, d)| d.name == desc.name) {
            return Err(ResizerError::Registration(format!("{} already registered", desc.name)));
        }
        let handle = SubdevHandle(self.next);
        self.next += 1;
        debug!("registered {} as {:?}", desc.name, handle);
        self.entries.push((handle, desc.clone()));
        Ok(handle)
    }

    fn unregister_subdev(&mut self, handle: SubdevHandle) {
        self.entries.retain(|(h, _)| *h != handle);
    }
}
