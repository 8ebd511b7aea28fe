/// Room variation — cosmetic parameters for the room behind a portal.
///
/// Keyed by destination portal id and consulted by the host's render
/// callback, so each traversal can present a visually distinct room
/// without any geometry changes.

/// Per-destination cosmetic parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomVariation {
    /// Color tint multiplied into the room's materials (RGB)
    pub tint: [f32; 3],
    /// Uniform scale applied to the room's decoration set
    pub scale: f32,
    /// Multiplier on the room's light intensity
    pub light_multiplier: f32,
}

impl Default for RoomVariation {
    fn default() -> Self {
        Self {
            tint: [1.0, 1.0, 1.0],
            scale: 1.0,
            light_multiplier: 1.0,
        }
    }
}
