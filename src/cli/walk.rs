use otter_know::{
    config::Config,
    search::{search, Action, Actions, State, Transition},
    types::err::ErrorKind,
};

const LEFT: u32 = 1;
const RIGHT: u32 = 2;

/// Steps along the integers.
struct Step;

impl Transition for Step {
    fn next_state(&self, state: &State, action: &Action) -> State {
        match action.id {
            LEFT => State::new(state.id - 1),
            _ => State::new(state.id + 1),
        }
    }
}

/// Either step is available within [-10, 10], and outside only a step back toward the interval.
struct Bounded;

impl Actions for Bounded {
    fn actions(&self, state: &State) -> Vec<Action> {
        let left = Action::new(LEFT, "<--");
        let right = Action::new(RIGHT, "-->");

        match state.id {
            id if id > 10 => vec![left],
            id if id < -10 => vec![right],
            _ => vec![left, right],
        }
    }
}

pub fn run(start: i64, goal: i64, config: &Config) -> Result<(), ErrorKind> {
    println!("Walking from {start} to {goal} with {}", config.search_strategy.value);

    let path = search(
        State::new(start),
        &State::new(goal),
        &Step,
        &Bounded,
        &config.search(),
    )?;

    println!("{path}");
    println!("{} steps", path.len());

    Ok(())
}
