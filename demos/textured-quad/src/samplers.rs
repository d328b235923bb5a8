//! Sampler presets and the cyclic selection between them.
//!
//! Six fixed filter/address-mode combinations, cycled with the arrow keys.
//! The selection is a single index that wraps in both directions.

/// Number of presets in [`SamplerPreset::ALL`].
pub const PRESET_COUNT: usize = 6;

/// A fixed combination of texture filtering and addressing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerPreset {
    PointClamp,
    PointWrap,
    LinearClamp,
    LinearWrap,
    AnisotropicClamp,
    AnisotropicWrap,
}

impl SamplerPreset {
    /// All presets, in cycling order.
    pub const ALL: [SamplerPreset; PRESET_COUNT] = [
        SamplerPreset::PointClamp,
        SamplerPreset::PointWrap,
        SamplerPreset::LinearClamp,
        SamplerPreset::LinearWrap,
        SamplerPreset::AnisotropicClamp,
        SamplerPreset::AnisotropicWrap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SamplerPreset::PointClamp => "PointClamp",
            SamplerPreset::PointWrap => "PointWrap",
            SamplerPreset::LinearClamp => "LinearClamp",
            SamplerPreset::LinearWrap => "LinearWrap",
            SamplerPreset::AnisotropicClamp => "AnisotropicClamp",
            SamplerPreset::AnisotropicWrap => "AnisotropicWrap",
        }
    }

    fn is_point(self) -> bool {
        matches!(self, SamplerPreset::PointClamp | SamplerPreset::PointWrap)
    }

    fn is_clamp(self) -> bool {
        matches!(
            self,
            SamplerPreset::PointClamp
                | SamplerPreset::LinearClamp
                | SamplerPreset::AnisotropicClamp
        )
    }

    fn max_anisotropy(self) -> u16 {
        match self {
            SamplerPreset::AnisotropicClamp | SamplerPreset::AnisotropicWrap => 4,
            // 1 disables anisotropic filtering.
            _ => 1,
        }
    }

    /// The wgpu sampler descriptor for this preset.
    pub fn descriptor(self) -> wgpu::SamplerDescriptor<'static> {
        let filter = if self.is_point() {
            wgpu::FilterMode::Nearest
        } else {
            wgpu::FilterMode::Linear
        };
        let address_mode = if self.is_clamp() {
            wgpu::AddressMode::ClampToEdge
        } else {
            wgpu::AddressMode::Repeat
        };

        wgpu::SamplerDescriptor {
            label: Some(self.name()),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: filter,
            anisotropy_clamp: self.max_anisotropy(),
            ..Default::default()
        }
    }
}

/// The cyclic sampler selection: one index into [`SamplerPreset::ALL`],
/// wrapping in both directions, starting at 0.
#[derive(Debug, Default)]
pub struct SamplerCycle {
    index: usize,
}

impl SamplerCycle {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> SamplerPreset {
        SamplerPreset::ALL[self.index]
    }

    /// Step to the next preset, wrapping past the end.
    pub fn advance(&mut self) -> SamplerPreset {
        self.index = (self.index + 1) % PRESET_COUNT;
        self.current()
    }

    /// Step to the previous preset, wrapping below zero to the last one.
    pub fn retreat(&mut self) -> SamplerPreset {
        self.index = self.index.checked_sub(1).unwrap_or(PRESET_COUNT - 1);
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_point_clamp() {
        let cycle = SamplerCycle::new();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current().name(), "PointClamp");
    }

    #[test]
    fn retreat_from_zero_wraps_to_last() {
        let mut cycle = SamplerCycle::new();
        assert_eq!(cycle.retreat(), SamplerPreset::AnisotropicWrap);
        assert_eq!(cycle.index(), PRESET_COUNT - 1);
    }

    #[test]
    fn advance_from_last_wraps_to_zero() {
        let mut cycle = SamplerCycle::new();
        cycle.retreat();
        assert_eq!(cycle.advance(), SamplerPreset::PointClamp);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn interior_steps_move_by_one() {
        let mut cycle = SamplerCycle::new();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 2);
        cycle.retreat();
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn seven_advances_land_on_index_one() {
        let mut cycle = SamplerCycle::new();
        let mut last = cycle.current();
        for _ in 0..7 {
            last = cycle.advance();
        }
        assert_eq!(cycle.index(), 1);
        assert_eq!(last, SamplerPreset::PointWrap);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut cycle = SamplerCycle::new();
        cycle.advance();
        cycle.reset();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn anisotropic_presets_use_linear_filtering() {
        // wgpu requires all-linear filters whenever anisotropy_clamp > 1.
        for preset in SamplerPreset::ALL {
            let desc = preset.descriptor();
            if desc.anisotropy_clamp > 1 {
                assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
                assert_eq!(desc.mag_filter, wgpu::FilterMode::Linear);
                assert_eq!(desc.mipmap_filter, wgpu::FilterMode::Linear);
            }
        }
    }

    #[test]
    fn preset_table_alternates_clamp_and_wrap() {
        let modes: Vec<wgpu::AddressMode> = SamplerPreset::ALL
            .iter()
            .map(|p| p.descriptor().address_mode_u)
            .collect();
        assert_eq!(
            modes,
            vec![
                wgpu::AddressMode::ClampToEdge,
                wgpu::AddressMode::Repeat,
                wgpu::AddressMode::ClampToEdge,
                wgpu::AddressMode::Repeat,
                wgpu::AddressMode::ClampToEdge,
                wgpu::AddressMode::Repeat,
            ]
        );
    }
}
