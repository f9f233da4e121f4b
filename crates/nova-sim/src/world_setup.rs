//! Entity spawn factories and scene composition.
//!
//! Factories load their assets through the catalog (fatal on a bad
//! path), spawn the component bundle, and return the entity. The
//! flat hecs world stands in for the scene graph: spawning attaches,
//! despawning detaches.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nova_core::components::{Collider, ColliderShape, ModelHandle, Name, Scale, ShipState};
use nova_core::constants::*;
use nova_core::enums::{Kind, OrbitStyle};
use nova_core::types::{Orientation, Position};

use crate::assets::{AssetCatalog, AssetError};
use crate::paths;
use crate::scheduler::{Scheduler, Task, TaskKind};
use crate::systems::orbit::OrbitState;
use crate::systems::wander::WanderState;

/// Wanderer route corners, visited in order on a 20 s-per-leg loop.
const WANDER_ROUTE: [[f64; 3]; 3] = [
    [300.0, 6000.0, 500.0],
    [700.0, -2000.0, 100.0],
    [0.0, -900.0, -1400.0],
];

/// Give up on spaced placement after this many rejected candidates.
const PLACEMENT_MAX_ATTEMPTS: u32 = 10_000;

/// Handles the engine keeps after composition.
pub struct SceneHandles {
    pub ship: Entity,
    /// Preloaded so firing never goes back to the loader.
    pub missile_model: ModelHandle,
}

/// Spawn the whole scene: universe, planets, station, player ship,
/// drone formations, orbiters, and the wanderer.
pub fn compose_scene(
    world: &mut World,
    catalog: &mut AssetCatalog,
    scheduler: &mut Scheduler,
    rng: &mut ChaCha8Rng,
) -> Result<SceneHandles, AssetError> {
    spawn_universe(
        world,
        catalog,
        "Universe",
        Position::new(0.0, 0.0, 0.0),
        UNIVERSE_SCALE,
    )?;

    // Planets at random positions with a minimum distance between each.
    let mut planets = Vec::with_capacity(PLANET_TEXTURES.len());
    let mut taken = Vec::with_capacity(PLANET_TEXTURES.len());
    for (i, texture) in PLANET_TEXTURES.iter().enumerate() {
        let position = generate_position(rng, &taken, 1000.0);
        let scale = rng.gen_range(150.0..275.0);
        let name = format!("Planet{}", i + 1);
        let planet = spawn_planet(world, catalog, &name, texture, position, scale)?;
        taken.push(position);
        planets.push(planet);
    }

    spawn_station(
        world,
        catalog,
        "Space Station1",
        Position::new(-7500.0, 500.0, 100.0),
        0.3,
    )?;

    let ship = spawn_ship(
        world,
        catalog,
        "Hero",
        Position::new(1000.0, 1200.0, -50.0),
        0.5,
    )?;

    // Each formation pattern gets its own randomly drawn planet.
    let mut pool = planets;
    let cloud_planet = draw_planet(rng, &mut pool);
    let seam_planet = draw_planet(rng, &mut pool);
    let circle_planet = draw_planet(rng, &mut pool);
    let orbit_planet = draw_planet(rng, &mut pool);

    spawn_formations(
        world,
        catalog,
        rng,
        cloud_planet,
        seam_planet,
        circle_planet,
    )?;

    // Two seam orbiters and two cloud orbiters around a shared planet.
    let specs = [
        (OrbitStyle::Seam, 800.0, 900.0),
        (OrbitStyle::Cloud, 400.0, 500.0),
        (OrbitStyle::Seam, 700.0, 800.0),
        (OrbitStyle::Cloud, 500.0, 600.0),
    ];
    for (i, (style, lo, hi)) in specs.into_iter().enumerate() {
        let index = i as u32 + 1;
        let radius = rng.gen_range(lo..hi);
        let speed = rng.gen_range(ORBIT_SPEED_MIN..ORBIT_SPEED_MAX);
        spawn_orbiter(
            world,
            catalog,
            scheduler,
            &format!("Orbiter{index}"),
            orbit_planet,
            radius,
            style,
            speed,
            index,
            ship,
        )?;
    }

    spawn_wanderer(
        world,
        catalog,
        "Wanderer1",
        Position::new(0.0, 0.0, 0.0),
        ship,
    )?;

    let missile_model = catalog.load_model(MODEL_MISSILE)?;

    Ok(SceneHandles {
        ship,
        missile_model,
    })
}

/// The enclosing world boundary (collides from the inside out).
pub fn spawn_universe(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    position: Position,
    scale: f64,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_UNIVERSE)?;
    let texture = catalog.load_texture(TEXTURE_UNIVERSE)?;
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::Universe,
        position,
        Orientation::default(),
        Scale(scale),
        Collider {
            shape: ColliderShape::InverseSphere {
                center: Position::default(),
                radius: UNIVERSE_BOUNDARY_RADIUS,
            },
            fluid: false,
        },
        model,
        texture,
    )))
}

pub fn spawn_planet(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    texture_path: &str,
    position: Position,
    scale: f64,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_PLANET)?;
    let texture = catalog.load_texture(texture_path)?;
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::Planet,
        position,
        Orientation::default(),
        Scale(scale),
        Collider {
            shape: ColliderShape::Sphere {
                center: Position::default(),
                radius: 1.15,
            },
            fluid: false,
        },
        model,
        texture,
    )))
}

pub fn spawn_station(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    position: Position,
    scale: f64,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_STATION)?;
    let texture = catalog.load_texture(TEXTURE_STATION)?;
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::SpaceStation,
        position,
        Orientation::default(),
        Scale(scale),
        Collider {
            shape: ColliderShape::Capsule {
                a: Position::new(300.0, -200.0, 500.0),
                b: Position::new(300.0, -200.0, -1000.0),
                radius: 3750.0,
            },
            fluid: false,
        },
        model,
        texture,
    )))
}

pub fn spawn_ship(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    position: Position,
    scale: f64,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_SHIP)?;
    let texture = catalog.load_texture(TEXTURE_SHIP)?;
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::Ship,
        position,
        Orientation::default(),
        Scale(scale),
        Collider {
            shape: ColliderShape::Sphere {
                center: Position::default(),
                radius: SHIP_COLLIDER_RADIUS,
            },
            fluid: false,
        },
        ShipState {
            missile_bay: MISSILE_BAY_CAPACITY,
            explode_count: 0,
        },
        model,
        texture,
    )))
}

pub fn spawn_drone(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    position: Position,
    scale: f64,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_DRONE)?;
    let texture = catalog.load_texture(TEXTURE_DRONE)?;
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::Drone,
        position,
        Orientation::default(),
        Scale(scale),
        Collider {
            shape: ColliderShape::Sphere {
                center: Position::default(),
                radius: DRONE_COLLIDER_RADIUS,
            },
            fluid: false,
        },
        model,
        texture,
    )))
}

/// Spawn an orbiting defender and register its orbit task.
#[allow(clippy::too_many_arguments)]
pub fn spawn_orbiter(
    world: &mut World,
    catalog: &mut AssetCatalog,
    scheduler: &mut Scheduler,
    name: &str,
    center: Entity,
    radius: f64,
    style: OrbitStyle,
    speed: f64,
    orbit_index: u32,
    stare_at: Entity,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_DRONE)?;
    let texture = catalog.load_texture(TEXTURE_DRONE)?;
    let entity = world.spawn((
        Name(name.to_string()),
        Kind::Orbiter,
        Position::default(),
        Orientation::default(),
        Scale(DEFENDER_SCALE),
        Collider {
            shape: ColliderShape::Sphere {
                center: Position::default(),
                radius: DEFENDER_COLLIDER_RADIUS,
            },
            fluid: false,
        },
        OrbitState {
            center,
            radius,
            style,
            speed,
            orbit_index,
            cloud_clock: 0,
            stare_at,
        },
        model,
        texture,
    ));
    scheduler.add(Task::new(
        &format!("traveler-{orbit_index}"),
        DEFAULT_TASK_PRIORITY,
        TaskKind::Orbit { entity },
    ));
    Ok(entity)
}

/// Spawn a wandering defender on the fixed looping route.
pub fn spawn_wanderer(
    world: &mut World,
    catalog: &mut AssetCatalog,
    name: &str,
    start: Position,
    stare_at: Entity,
) -> Result<Entity, AssetError> {
    let model = catalog.load_model(MODEL_DRONE)?;
    let texture = catalog.load_texture(TEXTURE_DRONE)?;
    let route = WANDER_ROUTE.map(|[x, y, z]| Position::new(x, y, z));
    Ok(world.spawn((
        Name(name.to_string()),
        Kind::Wanderer,
        start,
        Orientation::default(),
        Scale(DEFENDER_SCALE),
        Collider {
            shape: ColliderShape::Sphere {
                center: Position::default(),
                radius: DEFENDER_COLLIDER_RADIUS,
            },
            fluid: false,
        },
        WanderState::new(start, route, WANDER_LEG_SECS, stare_at),
        model,
        texture,
    )))
}

/// 60 drones per pattern: cloud, seam, and the three coordinate-plane
/// circles, each ring around its planet.
fn spawn_formations(
    world: &mut World,
    catalog: &mut AssetCatalog,
    rng: &mut ChaCha8Rng,
    cloud_planet: Entity,
    seam_planet: Entity,
    circle_planet: Entity,
) -> Result<(), AssetError> {
    let cloud_center = planet_position(world, cloud_planet);
    let seam_center = planet_position(world, seam_planet);
    let circle_center = planet_position(world, circle_planet);

    for j in 0..FORMATION_SIZE {
        let nick = format!("Drone{}", j + 1);
        let step = j as f64 / FORMATION_SIZE as f64;

        let dir = paths::cloud(rng);
        spawn_drone(
            world,
            catalog,
            &format!("{nick}-Cloud"),
            offset(cloud_center, dir * FORMATION_RADIUS),
            DRONE_SCALE,
        )?;

        let dir = paths::baseball_seams(j as f64, FORMATION_SIZE, FORMATION_SEAM_BULGE);
        spawn_drone(
            world,
            catalog,
            &format!("{nick}-Baseball"),
            offset(seam_center, dir * FORMATION_RADIUS),
            DRONE_SCALE,
        )?;

        spawn_drone(
            world,
            catalog,
            &format!("{nick}-X"),
            offset(circle_center, paths::circle_x(step) * FORMATION_RADIUS),
            DRONE_SCALE,
        )?;
        spawn_drone(
            world,
            catalog,
            &format!("{nick}-Y"),
            offset(circle_center, paths::circle_y(step) * FORMATION_RADIUS),
            DRONE_SCALE,
        )?;
        spawn_drone(
            world,
            catalog,
            &format!("{nick}-Z"),
            offset(circle_center, paths::circle_z(step) * FORMATION_RADIUS),
            DRONE_SCALE,
        )?;
    }
    Ok(())
}

/// Random position inside the spawn box, at least `min_distance` from
/// every existing position. Falls back to the last candidate if the
/// box is too crowded.
fn generate_position(rng: &mut ChaCha8Rng, existing: &[Position], min_distance: f64) -> Position {
    let mut candidate = Position::default();
    for _ in 0..PLACEMENT_MAX_ATTEMPTS {
        candidate = Position::new(
            rng.gen_range(-2000.0..10_000.0),
            rng.gen_range(2000.0..7000.0),
            rng.gen_range(-350.0..3550.0),
        );
        if existing
            .iter()
            .all(|p| p.range_to(&candidate) >= min_distance)
        {
            return candidate;
        }
    }
    log::warn!("placement gave up after {PLACEMENT_MAX_ATTEMPTS} attempts; accepting overlap");
    candidate
}

fn draw_planet(rng: &mut ChaCha8Rng, pool: &mut Vec<Entity>) -> Entity {
    pool.remove(rng.gen_range(0..pool.len()))
}

fn planet_position(world: &World, planet: Entity) -> Position {
    world
        .get::<&Position>(planet)
        .map(|pos| *pos)
        .unwrap_or_default()
}

fn offset(center: Position, by: glam::DVec3) -> Position {
    Position::from(center.to_dvec3() + by)
}
