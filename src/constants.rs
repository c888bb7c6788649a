// DOM hooks the web front-end attaches to. Both are optional on any given
// page: a missing canvas or an empty hexagon selection leaves that decoration off.

// Full-viewport canvas hosting the particle background
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Floating hexagon decorations randomized at start
pub const HEXAGON_SELECTOR: &str = ".geo-shape";
