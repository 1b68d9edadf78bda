use bitflags::bitflags;
use glam::Vec3;

// Blend/render state that requires a pipeline rebuild when toggled
bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MaterialFlags: u32 {
        const TRANSPARENT = 1 << 0;
        const ALPHA_HASH  = 1 << 1;
    }
}

/// The subset of the vehicle body's standard material that the reveal
/// cross-fade drives.
///
/// Scalar changes are plain uniform writes. Flag changes alter the pipeline,
/// so they bump [`version`](Self::version) and raise `needs_update` for the
/// renderer to consume.
#[derive(Debug, Clone)]
pub struct FadeMaterial {
    pub opacity: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    flags: MaterialFlags,
    version: u64,
    needs_update: bool,
}

impl FadeMaterial {
    /// A fully opaque material with no emission.
    #[must_use]
    pub fn opaque() -> Self {
        Self {
            opacity: 1.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            flags: MaterialFlags::empty(),
            version: 0,
            needs_update: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> MaterialFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.flags.contains(MaterialFlags::TRANSPARENT)
    }

    #[inline]
    #[must_use]
    pub fn alpha_hash(&self) -> bool {
        self.flags.contains(MaterialFlags::ALPHA_HASH)
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sets or clears `flags`, flagging a pipeline update only on actual change.
    pub fn set_flags(&mut self, flags: MaterialFlags, enabled: bool) {
        let before = self.flags;
        self.flags.set(flags, enabled);
        if self.flags != before {
            self.version += 1;
            self.needs_update = true;
        }
    }

    /// Returns whether a pipeline update was pending and clears it.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }
}

impl Default for FadeMaterial {
    fn default() -> Self {
        Self::opaque()
    }
}
