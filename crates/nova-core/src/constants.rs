//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World boundary ---

/// Universe model scale.
pub const UNIVERSE_SCALE: f64 = 13_500.0;

/// Inverse-sphere boundary radius in universe-local units.
pub const UNIVERSE_BOUNDARY_RADIUS: f64 = 0.9;

// --- Ship ---

/// Ship collision sphere radius (local units, scaled by entity scale).
pub const SHIP_COLLIDER_RADIUS: f64 = 10.0;

/// Thrust speed along a ship basis vector (units/s).
pub const SHIP_THRUST_RATE: f64 = 750.0;

/// Turn rate for heading and pitch controls (degrees/s).
pub const SHIP_TURN_RATE: f64 = 37.5;

/// Pitch is clamped to +/- this after every update (gimbal-lock guard).
pub const PITCH_LIMIT_DEG: f64 = 89.0;

// --- Missiles ---

/// Maximum rounds in the missile bay.
pub const MISSILE_BAY_CAPACITY: u8 = 6;

/// Reload cooldown before the bay refills (seconds).
pub const MISSILE_RELOAD_SECS: f64 = 0.45;

/// Total travel distance of a fired missile (world units).
pub const MISSILE_DISTANCE: f64 = 4000.0;

/// Flight interval duration (seconds).
pub const MISSILE_FLIGHT_SECS: f64 = 2.0;

/// Spawn offset in front of the ship (world units).
pub const MISSILE_SPAWN_OFFSET: f64 = 150.0;

/// Missile collision sphere radius (local units).
pub const MISSILE_COLLIDER_RADIUS: f64 = 1.0;

/// Missile model scale.
pub const MISSILE_SCALE: f64 = 2.0;

/// Barrage jitter half-range on the lateral (x/z) axes.
pub const BARRAGE_JITTER_LATERAL: f64 = 22.0;

/// Barrage jitter half-range on the forward (y) axis.
pub const BARRAGE_JITTER_FORWARD: f64 = 5.0;

// --- Formations and defenders ---

/// Drones per formation pattern.
pub const FORMATION_SIZE: u32 = 60;

/// Distance of formation drones from their anchor planet.
pub const FORMATION_RADIUS: f64 = 500.0;

/// Drone collision sphere radius (local units).
pub const DRONE_COLLIDER_RADIUS: f64 = 6.0;

/// Drone model scale.
pub const DRONE_SCALE: f64 = 5.0;

/// Orbiter/wanderer collision sphere radius (local units).
pub const DEFENDER_COLLIDER_RADIUS: f64 = 3.2;

/// Orbiter/wanderer model scale.
pub const DEFENDER_SCALE: f64 = 6.0;

/// Seam bulge parameter for drone formation rings.
pub const FORMATION_SEAM_BULGE: f64 = 0.4;

/// Seam bulge parameter for orbit trajectories.
pub const ORBIT_SEAM_BULGE: f64 = 2.0;

/// Orbiter angular speed range (revolutions of the seam parameter per second).
pub const ORBIT_SPEED_MIN: f64 = 0.005;
pub const ORBIT_SPEED_MAX: f64 = 0.02;

/// Ticks between cloud-orbit jumps.
pub const CLOUD_JUMP_TICKS: u32 = 240;

/// Seconds per wanderer route leg.
pub const WANDER_LEG_SECS: f64 = 20.0;

// --- Destruction lifecycle ---

/// Shrink task time window (seconds).
pub const SHRINK_WINDOW_SECS: f64 = 2.0;

/// Scale subtracted per tick while a planet shrinks.
pub const PLANET_SHRINK_STEP: f64 = 5.0;

/// Scale subtracted per tick while the space station shrinks.
pub const STATION_SHRINK_STEP: f64 = 0.01;

/// Maximum random heading spin per shrink tick (degrees).
pub const SHRINK_SPIN_MAX_DEG: f64 = 30.0;

/// Explosion effect ramp duration (seconds).
pub const EXPLOSION_SECS: f64 = 2.0;

// --- Scheduler ---

/// Default task priority (lower runs earlier).
pub const DEFAULT_TASK_PRIORITY: i32 = 0;

/// Missile cleanup runs after all movement tasks.
pub const CLEANUP_TASK_PRIORITY: i32 = 34;

// --- Asset paths ---

pub const MODEL_UNIVERSE: &str = "Assets/Universe/Universe.x";
pub const MODEL_PLANET: &str = "Assets/Planets/protoPlanet.x";
pub const MODEL_STATION: &str = "Assets/SpaceStation/spacestation.obj";
pub const MODEL_SHIP: &str = "Assets/Spaceships/spaceship.obj";
pub const MODEL_DRONE: &str = "Assets/DroneDefender/DroneDefender.obj";
pub const MODEL_MISSILE: &str = "Assets/Phaser/phaser.egg";

pub const TEXTURE_UNIVERSE: &str = "Assets/Universe/Universe.jpg";
pub const TEXTURE_STATION: &str = "Assets/SpaceStation/Metal.jpg";
pub const TEXTURE_SHIP: &str = "Assets/Spaceships/spaceship.jpg";
pub const TEXTURE_DRONE: &str = "Assets/DroneDefender/octotoad1_auv.png";

pub const PLANET_TEXTURES: [&str; 6] = [
    "Assets/Planets/Mars.jpg",
    "Assets/Planets/Purple.png",
    "Assets/Planets/Sand.png",
    "Assets/Planets/Tiled.jpg",
    "Assets/Planets/Wicker.jpg",
    "Assets/Planets/Rock.jpg",
];
