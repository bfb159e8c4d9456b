use super::TerminationCondition;

/// Stops the search as soon as either of its two conditions asks to stop, e.g. a node limit
/// paired with a time limit. Both conditions are told about every visited node.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn node_has_been_visited(&mut self) {
        self.t1.node_has_been_visited();
        self.t2.node_has_been_visited();
    }
}
