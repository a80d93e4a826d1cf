use checkout::{OrderWorkflow, SimulatedPaymentProcessor};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Money, OrderLine, Product, UserId};
use store::fixtures::sample_directory;
use store::{InMemoryOrderStore, InMemoryProductCatalog, InMemoryUserDirectory};

type BenchWorkflow = OrderWorkflow<
    InMemoryProductCatalog,
    InMemoryUserDirectory,
    InMemoryOrderStore,
    SimulatedPaymentProcessor<InMemoryUserDirectory>,
>;

fn make_workflow() -> BenchWorkflow {
    let catalog = InMemoryProductCatalog::with_products([
        Product::new("P001", "Laptop", Money::from_dollars(1200), u32::MAX),
        Product::new("P003", "Headphones", Money::from_dollars(150), u32::MAX),
    ]);
    let users = sample_directory();
    OrderWorkflow::new(
        catalog,
        users.clone(),
        InMemoryOrderStore::new(),
        SimulatedPaymentProcessor::new(users),
    )
}

fn lines() -> Vec<OrderLine> {
    vec![OrderLine::new("P001", 1), OrderLine::new("P003", 2)]
}

fn bench_create_order(c: &mut Criterion) {
    let workflow = make_workflow();
    let user_id = UserId::new("U001");
    let lines = lines();

    c.bench_function("checkout/create_order", |b| {
        b.iter(|| workflow.create_order(&user_id, &lines).unwrap());
    });
}

fn bench_create_and_process(c: &mut Criterion) {
    let workflow = make_workflow();
    let user_id = UserId::new("U001");
    let lines = lines();

    c.bench_function("checkout/create_and_process", |b| {
        b.iter(|| {
            let order = workflow.create_order(&user_id, &lines).unwrap();
            workflow.process_order(order.id()).unwrap()
        });
    });
}

criterion_group!(benches, bench_create_order, bench_create_and_process);
criterion_main!(benches);
