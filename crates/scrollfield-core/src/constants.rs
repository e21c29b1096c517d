// Layout, camera and scene tuning constants shared by the web frontend and tests.

// Viewport classification
pub const LARGE_DESKTOP_MIN_WIDTH_PX: f32 = 1920.0; // strictly above this is a large desktop
pub const REFERENCE_FOV_DEG: f32 = 65.0; // camera used to measure scene-space viewport size
pub const REFERENCE_DISTANCE: f32 = 18.0; // focal plane distance for the same measurement

// Object counts per theme/classification: [portrait, desktop, large desktop]
pub const DARK_STAR_COUNTS: [usize; 3] = [2500, 5000, 6000];
pub const LIGHT_STAR_COUNTS: [usize; 3] = [1000, 1000, 1000];
pub const DARK_NODE_COUNTS: [usize; 3] = [8, 12, 14];
pub const LIGHT_NODE_COUNTS: [usize; 3] = [6, 10, 10];

// Responsive scale
pub const SCALE_REFERENCE_WIDTH: f32 = 15.0; // scene width at which scale reaches 1.0
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 1.2;
pub const LARGE_DESKTOP_SCALE_BOOST: f32 = 1.25;
pub const CENTRAL_SCALE_MAX: f32 = SCALE_MAX * LARGE_DESKTOP_SCALE_BOOST;

// Camera travel
pub const CAMERA_START_Z: f32 = 18.0;
pub const CAMERA_START_Z_PORTRAIT: f32 = 28.0;
pub const CAMERA_END_Z_DARK: f32 = -120.0;
pub const CAMERA_END_Z_LIGHT: f32 = -100.0;
pub const FOV_START_DEG: f32 = 65.0;
pub const FOV_START_DEG_PORTRAIT: f32 = 85.0;
pub const FOV_END_DEG: f32 = 95.0;
pub const FOV_END_DEG_PORTRAIT: f32 = 100.0;
pub const LOOK_AT_Z_OFFSET: f32 = 30.0; // camera looks this far ahead along -Z

// Camera smoothing (applied once per frame, not time-normalized)
pub const POSITION_SMOOTHING: f32 = 0.05;
pub const FOV_SMOOTHING: f32 = 0.05;
pub const PARALLAX_SMOOTHING: f32 = 0.03;
pub const PARALLAX_DIVISOR: f32 = 20.0;
pub const MOUSE_INFLUENCE: f32 = 0.3;
pub const MOUSE_INFLUENCE_PORTRAIT: f32 = 0.15;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;

// Node cloud placement
pub const NODE_SPREAD_XY: f32 = 50.0;
pub const NODE_SPREAD_XY_PORTRAIT: f32 = 30.0;
pub const NODE_SPREAD_Z_STEP: f32 = 25.0;
pub const NODE_BASE_Z_OFFSET: f32 = 20.0;

// Starfield
pub const STAR_HALF_EXTENT: f32 = 125.0;
pub const STAR_MAX_SIZE: f32 = 2.0;
pub const STAR_POINT_SIZE: f32 = 0.12;
pub const STAR_OPACITY: f32 = 0.6;
pub const STAR_ROTATION_SPEED: f32 = 0.015; // radians per second about Y

// Reference grid
pub const GRID_Y: f32 = -10.0;
pub const GRID_CELL_SIZE: f32 = 2.0;
pub const GRID_SECTION_SIZE: f32 = 10.0;
pub const GRID_FADE_DISTANCE: f32 = 80.0;
pub const GRID_FADE_DISTANCE_PORTRAIT: f32 = 50.0;

// Multisampling per classification
pub const MULTISAMPLING: [u32; 3] = [2, 4, 8];

// Fallback config for unusable viewports
pub const FALLBACK_STAR_COUNT: usize = 500;
pub const FALLBACK_NODE_COUNT: usize = 4;

// Central mesh
pub const CENTRAL_RADIUS: f32 = 6.0;
pub const CENTRAL_DETAIL: u32 = 3;
pub const CENTRAL_Z: f32 = -10.0;
pub const CENTRAL_SPIN_Y_PER_FRAME: f32 = 0.002;
pub const CENTRAL_SPIN_X_PER_FRAME: f32 = 0.001;
pub const CENTRAL_SCROLL_GROWTH: f32 = 0.5;

// Node meshes
pub const NODE_RADIUS: f32 = 1.5;
pub const NODE_DETAIL: u32 = 0;
pub const NODE_PHASE_SCALE: f32 = 10_000.0; // rotation seed -> float animation phase

// Float animation
pub const CENTRAL_FLOAT_SPEED: f32 = 1.5;
pub const CENTRAL_FLOAT_ROTATION: f32 = 0.5;
pub const CENTRAL_FLOAT_INTENSITY: f32 = 0.5;
pub const NODE_FLOAT_SPEED_BASE: f32 = 0.5;
pub const NODE_FLOAT_ROTATION: f32 = 2.0;
pub const NODE_FLOAT_INTENSITY: f32 = 1.0;

// Lights
pub const SPOT_POSITION: [f32; 3] = [20.0, 20.0, 10.0];
pub const SPOT_ANGLE: f32 = 0.2;
pub const SPOT_PENUMBRA: f32 = 1.0;
pub const POINT_POSITION: [f32; 3] = [-20.0, -10.0, -20.0];

// Post chain
pub const CHROMATIC_OFFSET: [f32; 2] = [0.0006, 0.0006];
pub const BLOOM_RADIUS: f32 = 0.4;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const DARK_BLOOM_THRESHOLD: f32 = 0.05;
pub const LIGHT_BLOOM_THRESHOLD: f32 = 0.8;
pub const DARK_BLOOM_INTENSITY: f32 = 1.0;
pub const LIGHT_BLOOM_INTENSITY: f32 = 0.3;
pub const DARK_NOISE_OPACITY: f32 = 0.08;
pub const LIGHT_NOISE_OPACITY: f32 = 0.03;
pub const DARK_VIGNETTE_DARKNESS: f32 = 1.05;
pub const LIGHT_VIGNETTE_DARKNESS: f32 = 0.6;

// Palette (sRGB hex, [dark, light])
pub const BACKGROUND_HEX: [u32; 2] = [0x020202, 0xf5f5f7];
pub const STAR_COLOR_HEX: [u32; 2] = [0xffffff, 0x4488ff];
pub const GRID_SECTION_HEX: [u32; 2] = [0x222222, 0xcccccc];
pub const GRID_CELL_HEX: [u32; 2] = [0x111111, 0xeeeeee];
pub const CENTRAL_COLOR_HEX: [u32; 2] = [0x050505, 0xffffff];
pub const CENTRAL_EMISSIVE_HEX: [u32; 2] = [0x111111, 0xffffff];
pub const CENTRAL_EMISSIVE_INTENSITY: [f32; 2] = [1.0, 0.1];
pub const CENTRAL_OPACITY: [f32; 2] = [0.4, 0.6];
pub const DARK_NODE_COLORS_HEX: [u32; 2] = [0x4488ff, 0xff4488]; // alternating
pub const LIGHT_NODE_COLOR_HEX: u32 = 0x222222;
pub const NODE_OPACITY: [f32; 2] = [0.15, 0.3];

// Light intensities ([dark, light])
pub const AMBIENT_INTENSITY: [f32; 2] = [0.15, 0.5];
pub const SPOT_INTENSITY: [f32; 2] = [3.0, 1.0];
pub const SPOT_COLOR_HEX: u32 = 0x4488ff;
pub const POINT_INTENSITY: [f32; 2] = [2.0, 0.5];
pub const POINT_COLOR_HEX: [u32; 2] = [0xff4488, 0x4488ff];
