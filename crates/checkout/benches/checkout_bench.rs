use checkout::{InMemorySender, LineItem, Money, OrderConfirmation, ShoppingCart, SimulatedGateway};
use common::{Latency, SequentialIds};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_subtotal(c: &mut Criterion) {
    let mut cart = ShoppingCart::with_collaborators(
        SimulatedGateway::with_parts(Latency::none(), SequentialIds::new()),
        InMemorySender::new(),
        SequentialIds::new(),
    );
    for n in 0..100u32 {
        cart.add_item(format!("Product {n}"), Money::from_cents(100 * i64::from(n) + 99), 2);
    }

    c.bench_function("checkout/subtotal_100_items", |b| {
        b.iter(|| cart.subtotal());
    });
}

fn bench_discounted_total(c: &mut Criterion) {
    let mut cart = ShoppingCart::with_collaborators(
        SimulatedGateway::with_parts(Latency::none(), SequentialIds::new()),
        InMemorySender::new(),
        SequentialIds::new(),
    );
    for n in 0..100u32 {
        cart.add_item(format!("Product {n}"), Money::from_cents(100 * i64::from(n) + 99), 2);
    }
    cart.apply_discount("SUMMER10");

    c.bench_function("checkout/discounted_total_100_items", |b| {
        b.iter(|| cart.total());
    });
}

fn bench_compose_confirmation(c: &mut Criterion) {
    let items: Vec<LineItem> = (0..20u32)
        .map(|n| {
            LineItem::new(
                format!("Product {n}"),
                Money::from_cents(100 * i64::from(n) + 99),
                2,
            )
        })
        .collect();
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let discount = subtotal.percentage(10.0);
    let total = subtotal - discount;

    c.bench_function("checkout/compose_confirmation_20_items", |b| {
        b.iter(|| {
            OrderConfirmation::compose(
                "customer@example.com",
                Some("ORD-BENCH001"),
                &items,
                Some(("SUMMER10", discount)),
                subtotal,
                total,
                None,
            )
        });
    });
}

fn bench_full_checkout(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("checkout/full_checkout", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut cart = ShoppingCart::with_collaborators(
                    SimulatedGateway::with_parts(Latency::none(), SequentialIds::new()),
                    InMemorySender::new(),
                    SequentialIds::new(),
                );
                cart.add_item("Laptop", Money::from_cents(99999), 1);
                cart.add_item("Wireless Mouse", Money::from_cents(2999), 2);
                cart.add_item("USB-C Cable", Money::from_cents(1999), 1);
                cart.apply_discount("SUMMER10");
                cart.checkout("customer@example.com", "CREDIT_CARD").await;
            });
        });
    });
}

criterion_group!(
    benches,
    bench_subtotal,
    bench_discounted_total,
    bench_compose_confirmation,
    bench_full_checkout,
);
criterion_main!(benches);
