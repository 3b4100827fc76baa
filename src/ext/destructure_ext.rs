pub trait DestructureTupleExt<A, B> {
    fn destructure(self) -> (Option<A>, Option<B>);
}

impl<A, B> DestructureTupleExt<A, B> for Option<(A, B)> {
    fn destructure(self) -> (Option<A>, Option<B>) {
        self.map(|(a, b)| (Some(a), Some(b)))
            .unwrap_or((None, None))
    }
}
