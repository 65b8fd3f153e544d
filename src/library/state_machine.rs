use std::collections::VecDeque;

/// Synchronous event loop over a pure transition function.
///
/// Each effect is interpreted inline and the event it yields is queued, so a
/// single call to [`StateMachine::run`] drives the machine until no effects
/// remain.
pub struct StateMachine<'a, TState, TEvent, TEffect> {
    transition_fn: Box<dyn Fn(TState, TEvent) -> (TState, Vec<TEffect>) + 'a>,
    render_fn: Box<dyn FnMut(&TState) + 'a>,
    run_effect_fn: Box<dyn Fn(TEffect) -> TEvent + 'a>,
}

impl<'a, TState, TEvent, TEffect> StateMachine<'a, TState, TEvent, TEffect> {
    pub fn new(
        transition_fn: impl Fn(TState, TEvent) -> (TState, Vec<TEffect>) + 'a,
        render_fn: impl FnMut(&TState) + 'a,
        run_effect_fn: impl Fn(TEffect) -> TEvent + 'a,
    ) -> Self {
        Self {
            transition_fn: Box::new(transition_fn),
            render_fn: Box::new(render_fn),
            run_effect_fn: Box::new(run_effect_fn),
        }
    }

    pub fn run(&mut self, state: TState, event: TEvent) -> TState {
        let mut events = VecDeque::from([event]);
        let mut state = state;

        while let Some(event) = events.pop_front() {
            let (new_state, effects) = (self.transition_fn)(state, event);
            (self.render_fn)(&new_state);
            state = new_state;

            for effect in effects {
                events.push_back((self.run_effect_fn)(effect));
            }
        }

        state
    }
}
