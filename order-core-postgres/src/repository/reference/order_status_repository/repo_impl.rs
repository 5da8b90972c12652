use crate::unit_of_work::Executor;

pub struct OrderStatusRepositoryImpl {
    pub executor: Executor,
}

impl OrderStatusRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
