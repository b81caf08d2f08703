/// Membership in up to 32 numbered layers. A raycaster only reports objects
/// sharing at least one layer with it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layers {
    mask: u32,
}

impl Default for Layers {
    /// Member of layer 0 only.
    fn default() -> Self {
        Self { mask: 1 }
    }
}

impl Layers {
    pub const ALL: Layers = Layers { mask: u32::MAX };
    pub const NONE: Layers = Layers { mask: 0 };

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Membership in `layer` only.
    pub fn set(&mut self, layer: u8) {
        self.mask = Self::bit(layer);
    }

    pub fn enable(&mut self, layer: u8) {
        self.mask |= Self::bit(layer);
    }

    pub fn enable_all(&mut self) {
        self.mask = u32::MAX;
    }

    pub fn disable(&mut self, layer: u8) {
        self.mask &= !Self::bit(layer);
    }

    pub fn disable_all(&mut self) {
        self.mask = 0;
    }

    pub fn toggle(&mut self, layer: u8) {
        self.mask ^= Self::bit(layer);
    }

    /// True when the two sets share at least one layer.
    pub fn test(&self, other: &Layers) -> bool {
        self.mask & other.mask != 0
    }

    pub fn is_enabled(&self, layer: u8) -> bool {
        self.mask & Self::bit(layer) != 0
    }

    fn bit(layer: u8) -> u32 {
        debug_assert!(layer < 32, "layer {layer} out of range");
        1u32 << (layer & 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_layer_zero() {
        let layers = Layers::default();
        assert!(layers.is_enabled(0));
        assert!(!layers.is_enabled(1));
    }

    #[test]
    fn set_replaces_membership() {
        let mut layers = Layers::default();
        layers.enable(3);
        layers.set(5);
        assert_eq!(layers.mask(), 1 << 5);
    }

    #[test]
    fn toggle_and_test() {
        let mut a = Layers::default();
        let mut b = Layers::NONE;
        assert!(!a.test(&b));

        b.toggle(0);
        assert!(a.test(&b));

        a.disable(0);
        assert!(!a.test(&b));
        assert!(Layers::ALL.test(&b));
    }
}
