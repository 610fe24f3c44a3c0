/*!
Uninformed search through a space of states.

Given a start state, a goal state, and a pair of strategies:
- A [Transition], which gives the state following some state by some action.
- [Actions], which gives the actions available at some state.

A [search] finds a sequence of actions from the start to the goal, if one exists.

The search component is independent of the logic engine, and shares no structure with the engine.

# Example

A walk on the integers, stepping left or right, with steps outside the interval \[-10, 10\] always back toward the interval.

```rust
# use otter_know::config::{SearchConfig, SearchStrategy};
# use otter_know::search::{search, Action, Actions, State, Transition};
struct Step;

impl Transition for Step {
    fn next_state(&self, state: &State, action: &Action) -> State {
        match action.id {
            1 => State::new(state.id - 1),
            _ => State::new(state.id + 1),
        }
    }
}

struct Moves;

impl Actions for Moves {
    fn actions(&self, state: &State) -> Vec<Action> {
        let left = Action::new(1, "<--");
        let right = Action::new(2, "-->");
        match state.id {
            id if id > 10 => vec![left],
            id if id < -10 => vec![right],
            _ => vec![left, right],
        }
    }
}

let path = search(State::new(12), &State::new(4), &Step, &Moves, &SearchConfig::default()).unwrap();
assert_eq!(path.len(), 8);
assert_eq!(path.goal().id, 4);
```

# Implementation

States are stored in an arena, and each stored state notes the key of the state it was discovered from (its parent) together with the action taken.
A path is then recovered by following parent keys from the goal back to the start.

A state is added to the frontier only when first discovered, where states are identified by [id](State::id).
So, each state is expanded at most once, and a search on a finite space of states always ends.
The goal test is made when a state is taken from the frontier.
*/

use std::collections::{HashSet, VecDeque};

use slotmap::SlotMap;

use crate::{
    config::{SearchConfig, SearchStrategy},
    misc::log::targets::{self},
    types::err::{self},
};

/// A state, identified by its id.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub id: i64,
    pub description: String,
}

impl State {
    pub fn new(id: i64) -> Self {
        State {
            id,
            description: String::default(),
        }
    }

    pub fn described(id: i64, description: impl Into<String>) -> Self {
        State {
            id,
            description: description.into(),
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description.is_empty() {
            true => write!(f, "{}", self.id),
            false => write!(f, "{} ({})", self.id, self.description),
        }
    }
}

/// An action, to be taken at some state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Action {
    pub id: u32,
    pub name: String,
}

impl Action {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Action {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The state following some state by some action.
pub trait Transition {
    fn next_state(&self, state: &State, action: &Action) -> State;
}

/// The actions available at some state.
pub trait Actions {
    fn actions(&self, state: &State) -> Vec<Action>;
}

slotmap::new_key_type! {
    /// The key to a state discovered during a search.
    pub struct NodeKey;
}

struct Node {
    state: State,
    parent: Option<(NodeKey, Action)>,
}

/// A path from the start of a search to the goal.
#[derive(Clone, Debug)]
pub struct Path {
    states: Vec<State>,
    actions: Vec<Action>,
}

impl Path {
    /// The states of the path, from start to goal.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The actions of the path, from start to goal.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn start(&self) -> &State {
        &self.states[0]
    }

    pub fn goal(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    /// The count of actions on the path.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the start is the goal.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start())?;
        for (action, state) in self.actions.iter().zip(self.states.iter().skip(1)) {
            write!(f, " {action} {state}")?;
        }
        Ok(())
    }
}

/// A path from `start` to `goal`, if some path is found.
pub fn search(
    start: State,
    goal: &State,
    transition: &impl Transition,
    actions: &impl Actions,
    config: &SearchConfig,
) -> Result<Path, err::SearchError> {
    let mut nodes: SlotMap<NodeKey, Node> = SlotMap::with_key();
    let mut frontier: VecDeque<NodeKey> = VecDeque::default();
    let mut discovered: HashSet<i64> = HashSet::default();
    let mut expanded: usize = 0;

    discovered.insert(start.id);
    frontier.push_back(nodes.insert(Node {
        state: start,
        parent: None,
    }));

    loop {
        let key = match config.strategy {
            SearchStrategy::BreadthFirst => frontier.pop_front(),
            SearchStrategy::DepthFirst => frontier.pop_back(),
        };

        let Some(key) = key else {
            log::debug!(target: targets::SEARCH, "Frontier exhausted after expanding {expanded} states");
            return Err(err::SearchError::GoalNotFound);
        };

        if nodes[key].state == *goal {
            log::debug!(target: targets::SEARCH, "Goal found after expanding {expanded} states");
            return Ok(path_to(&nodes, key));
        }

        if let Some(limit) = config.expansion_limit {
            if expanded >= limit {
                return Err(err::SearchError::ExpansionLimit(limit));
            }
        }
        expanded += 1;

        let state = nodes[key].state.clone();
        for action in actions.actions(&state) {
            let next = transition.next_state(&state, &action);
            if discovered.insert(next.id) {
                log::trace!(target: targets::SEARCH, "Discovered {next} from {state} by {action}");
                frontier.push_back(nodes.insert(Node {
                    state: next,
                    parent: Some((key, action)),
                }));
            }
        }
    }
}

fn path_to(nodes: &SlotMap<NodeKey, Node>, goal: NodeKey) -> Path {
    let mut states = Vec::default();
    let mut actions = Vec::default();

    let mut key = goal;
    loop {
        let node = &nodes[key];
        states.push(node.state.clone());
        match &node.parent {
            Some((parent, action)) => {
                actions.push(action.clone());
                key = *parent;
            }
            None => break,
        }
    }

    states.reverse();
    actions.reverse();

    Path { states, actions }
}
