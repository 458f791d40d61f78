//! Patrolling Guard
//!
//! This example drives a machine from a fixed-step game loop.
//!
//! Key concepts:
//! - One behavior struct per state, each with its own `reason` and `act`
//! - The loop, not the machine, decides when to tick
//! - Entry and exit hooks for per-state setup
//! - Transition history for after-the-fact inspection
//!
//! Run with: RUST_LOG=statewright=debug cargo run --example patrol

use statewright::{identifier_enum, MachineBuilder, State, StateBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

identifier_enum! {
    enum GuardState {
        Patrol,
        Chase,
        Alarm,
    }
}

identifier_enum! {
    enum Sighting {
        PlayerSpotted,
        PlayerLost,
        PlayerCornered,
    }
}

struct World {
    guard: i32,
    player: i32,
    tick: u32,
}

impl World {
    fn distance(&self) -> i32 {
        (self.player - self.guard).abs()
    }
}

struct Patrol {
    heading: i32,
}

impl StateBehavior<Sighting, World> for Patrol {
    fn reason(&self, world: &World) -> Option<Sighting> {
        (world.distance() <= 4).then_some(Sighting::PlayerSpotted)
    }

    fn act(&mut self, world: &mut World) {
        if !(0..=10).contains(&(world.guard + self.heading)) {
            self.heading = -self.heading;
        }
        world.guard += self.heading;
    }

    fn on_enter(&mut self) {
        println!("  guard: back to the rounds");
    }
}

struct Chase;

impl StateBehavior<Sighting, World> for Chase {
    fn reason(&self, world: &World) -> Option<Sighting> {
        match world.distance() {
            0 => Some(Sighting::PlayerCornered),
            d if d > 8 => Some(Sighting::PlayerLost),
            _ => None,
        }
    }

    fn act(&mut self, world: &mut World) {
        world.guard += (world.player - world.guard).signum();
    }

    fn on_enter(&mut self) {
        println!("  guard: hey, you!");
    }

    fn on_exit(&mut self) {
        println!("  guard: catching breath");
    }
}

struct Alarm;

impl StateBehavior<Sighting, World> for Alarm {
    fn reason(&self, _world: &World) -> Option<Sighting> {
        None
    }

    fn act(&mut self, _world: &mut World) {}

    fn on_enter(&mut self) {
        println!("  guard: sounding the alarm");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Patrolling Guard ===\n");

    let mut machine = MachineBuilder::new()
        .unique_ids()
        .validate_destinations()
        .track_history()
        .state(
            State::new(GuardState::Patrol, Patrol { heading: 1 })
                .with_transition(Sighting::PlayerSpotted, GuardState::Chase),
        )
        .state(
            State::new(GuardState::Chase, Chase)
                .with_transition(Sighting::PlayerLost, GuardState::Patrol)
                .with_transition(Sighting::PlayerCornered, GuardState::Alarm),
        )
        .state(State::new(GuardState::Alarm, Alarm))
        .build()?;

    let mut world = World {
        guard: 0,
        player: 20,
        tick: 0,
    };

    // The player wanders in, runs off, then comes back and stands still.
    let player_path = [20, 12, 8, 6, 18, 25, 25, 25, 9, 7, 7, 7, 7, 7, 7];

    for position in player_path {
        world.tick += 1;
        world.player = position;

        if let Some(sighting) = machine.reason(&world)? {
            machine.perform_transition(&sighting)?;
        }
        machine.act(&mut world)?;

        println!(
            "tick {:>2}: {:?} guard={} player={}",
            world.tick,
            machine.current_state_id()?,
            world.guard,
            world.player
        );

        if machine.current_state_id()? == &GuardState::Alarm {
            break;
        }
    }

    if let Some(history) = machine.history() {
        println!("\nPath taken: {:?}", history.get_path());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
