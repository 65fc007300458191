use oplint_core::{CallSite, CallTarget, Finding, Location};

/// Host semantic resolver. Turns a host call-expression node into facts.
pub trait Resolver {
    type Node;

    fn resolve(&self, node: &Self::Node) -> CallTarget;
    fn location(&self, node: &Self::Node) -> Location;

    fn call_site(&self, node: &Self::Node) -> CallSite {
        CallSite {
            location: self.location(node),
            target: self.resolve(node),
        }
    }
}

/// Host diagnostic collector. Fire-and-forget.
pub trait Sink {
    fn report(&mut self, finding: Finding);
}

impl Sink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Sink that drops everything; for callers that only want the return value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn report(&mut self, _finding: Finding) {}
}
