//! End-to-end scenarios driving a machine the way an application would.

use statewright::builder::passive_state;
use statewright::{
    identifier_enum, BuildError, Machine, MachineBuilder, MachineError, State, StateBehavior,
};
use std::cell::RefCell;
use std::rc::Rc;

identifier_enum! {
    enum Mode {
        Idle,
        Running,
    }
}

identifier_enum! {
    enum Signal {
        Start,
        Stop,
    }
}

#[test]
fn idle_running_round_trip() {
    let mut machine: Machine<Mode, Signal, ()> = Machine::from_states([
        passive_state(Mode::Idle, [(Signal::Start, Mode::Running)]),
        passive_state(Mode::Running, [(Signal::Stop, Mode::Idle)]),
    ]);

    assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));

    assert_eq!(machine.perform_transition(&Signal::Start), Ok(true));
    assert_eq!(machine.current_state_id(), Ok(&Mode::Running));

    assert_eq!(machine.perform_transition(&Signal::Stop), Ok(true));
    assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));

    // Idle has no Stop transition.
    assert_eq!(machine.perform_transition(&Signal::Stop), Ok(false));
    assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));
}

#[test]
fn empty_machine_fails_explicitly() {
    let mut machine: Machine<Mode, Signal, ()> = Machine::default();

    assert_eq!(
        machine.perform_transition(&Signal::Start),
        Err(MachineError::NotInitialized)
    );
    assert!(machine.current_state().is_err());
    assert_eq!(
        MachineError::NotInitialized.to_string(),
        "Machine not initialized: no state has been registered"
    );
}

/// Job queue shared with the states.
#[derive(Default)]
struct Jobs {
    pending: Vec<&'static str>,
    done: Vec<&'static str>,
}

struct Waiting;

impl StateBehavior<Signal, Jobs> for Waiting {
    fn reason(&self, jobs: &Jobs) -> Option<Signal> {
        (!jobs.pending.is_empty()).then_some(Signal::Start)
    }

    fn act(&mut self, _jobs: &mut Jobs) {}
}

struct Working {
    entries: Rc<RefCell<u32>>,
}

impl StateBehavior<Signal, Jobs> for Working {
    fn reason(&self, jobs: &Jobs) -> Option<Signal> {
        jobs.pending.is_empty().then_some(Signal::Stop)
    }

    fn act(&mut self, jobs: &mut Jobs) {
        if let Some(job) = jobs.pending.pop() {
            jobs.done.push(job);
        }
    }

    fn on_enter(&mut self) {
        *self.entries.borrow_mut() += 1;
    }
}

fn tick(machine: &mut Machine<Mode, Signal, Jobs>, jobs: &mut Jobs) {
    if let Some(signal) = machine.reason(jobs).unwrap() {
        machine.perform_transition(&signal).unwrap();
    }
    machine.act(jobs).unwrap();
}

#[test]
fn tick_loop_processes_queue() {
    let entries = Rc::new(RefCell::new(0));
    let mut machine = MachineBuilder::new()
        .validate_destinations()
        .track_history()
        .state(State::new(Mode::Idle, Waiting).with_transition(Signal::Start, Mode::Running))
        .state(
            State::new(
                Mode::Running,
                Working {
                    entries: Rc::clone(&entries),
                },
            )
            .with_transition(Signal::Stop, Mode::Idle),
        )
        .build()
        .unwrap();

    let mut jobs = Jobs::default();

    tick(&mut machine, &mut jobs);
    assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));

    jobs.pending.extend(["a", "b"]);
    tick(&mut machine, &mut jobs);
    tick(&mut machine, &mut jobs);
    assert_eq!(jobs.done, vec!["b", "a"]);
    assert_eq!(machine.current_state_id(), Ok(&Mode::Running));

    tick(&mut machine, &mut jobs);
    assert_eq!(machine.current_state_id(), Ok(&Mode::Idle));

    jobs.pending.push("c");
    tick(&mut machine, &mut jobs);
    tick(&mut machine, &mut jobs);

    assert_eq!(jobs.done, vec!["b", "a", "c"]);
    assert_eq!(*entries.borrow(), 2);
    assert_eq!(
        machine.history().unwrap().get_path(),
        vec![&Mode::Idle, &Mode::Running, &Mode::Idle, &Mode::Running, &Mode::Idle]
    );
}

#[test]
fn builder_errors_render_context() {
    let err = MachineBuilder::<Mode, Signal, ()>::new()
        .validate_destinations()
        .state(passive_state(Mode::Idle, [(Signal::Start, Mode::Running)]))
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Transition 'Start' from 'Idle' targets unregistered state 'Running'"
    );
    assert_eq!(
        BuildError::NoStates.to_string(),
        "No states defined. Add at least one state with .state(...)"
    );
}

#[test]
fn history_round_trips_through_json() {
    let mut machine: Machine<Mode, Signal, ()> = Machine::from_states([
        passive_state(Mode::Idle, [(Signal::Start, Mode::Running)]),
        passive_state(Mode::Running, [(Signal::Stop, Mode::Idle)]),
    ])
    .with_history();

    machine.perform_transition(&Signal::Start).unwrap();
    machine.perform_transition(&Signal::Stop).unwrap();

    let json = serde_json::to_string(machine.history().unwrap()).unwrap();
    let restored: statewright::StateHistory<Mode, Signal> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.transitions()[1].via, Signal::Stop);
}
