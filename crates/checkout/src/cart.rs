//! The shopping cart orchestrator.

use common::{IdSource, RandomIds};

use crate::discount::DiscountService;
use crate::items::{LineItem, LineItems};
use crate::money::Money;
use crate::notification::{ConfirmationSender, LoggedEmailSender, OrderConfirmation};
use crate::payment::{PaymentGateway, PaymentResult, SimulatedGateway};
use crate::state::CartState;

/// Characters in an order id after the `ORD-` prefix.
const ORDER_SUFFIX_LEN: usize = 8;

/// Drives the checkout flow over its collaborators.
///
/// The cart is the single owner of every queryable "last result": the
/// order id, the last payment outcome, and the last confirmation
/// recipient live here, while the applied discount code lives in the
/// resolver. Collaborators never reach into each other.
pub struct ShoppingCart<P, N, I>
where
    P: PaymentGateway,
    N: ConfirmationSender,
    I: IdSource,
{
    items: LineItems,
    discounts: DiscountService,
    state: CartState,
    order_id: Option<String>,
    last_payment: Option<PaymentResult>,
    email_sent_to: Option<String>,
    gateway: P,
    sender: N,
    ids: I,
}

impl ShoppingCart<SimulatedGateway<RandomIds>, LoggedEmailSender, RandomIds> {
    /// Creates a cart wired to the simulated gateway and the logged
    /// email sender.
    pub fn new() -> Self {
        Self::with_collaborators(
            SimulatedGateway::new(),
            LoggedEmailSender::new(),
            RandomIds::new(),
        )
    }
}

impl Default for ShoppingCart<SimulatedGateway<RandomIds>, LoggedEmailSender, RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, N, I> ShoppingCart<P, N, I>
where
    P: PaymentGateway,
    N: ConfirmationSender,
    I: IdSource,
{
    /// Creates an empty cart over the given collaborators.
    pub fn with_collaborators(gateway: P, sender: N, ids: I) -> Self {
        Self {
            items: LineItems::new(),
            discounts: DiscountService::new(),
            state: CartState::default(),
            order_id: None,
            last_payment: None,
            email_sent_to: None,
            gateway,
            sender,
            ids,
        }
    }

    /// Adds a line to the cart. Lines are never merged or validated.
    pub fn add_item(&mut self, product_name: impl Into<String>, unit_price: Money, quantity: u32) {
        let item = LineItem::new(product_name, unit_price, quantity);
        tracing::info!(product_name = %item.product_name, quantity, "item added");
        self.items.add(item);
    }

    /// Returns a detached copy of the cart lines.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.to_vec()
    }

    /// Returns the number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sums the line values. Zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.subtotal()
    }

    /// Attempts to apply a discount code.
    ///
    /// Returns true on a known code, replacing any previous one. An
    /// unknown code is rejected and the previous code stays in effect.
    pub fn apply_discount(&mut self, code: &str) -> bool {
        self.discounts.apply(code)
    }

    /// Returns the discount value for the current subtotal.
    pub fn discount_amount(&self) -> Money {
        self.discounts.amount(self.subtotal())
    }

    /// Returns subtotal minus discount.
    pub fn total(&self) -> Money {
        self.subtotal() - self.discount_amount()
    }

    /// Returns the applied discount code, if any.
    pub fn applied_discount_code(&self) -> Option<&str> {
        self.discounts.active_code()
    }

    /// Charges the given amount through the gateway and records the
    /// outcome as the last payment result.
    pub async fn process_payment(&mut self, method: &str, amount: Money) -> PaymentResult {
        let result = self.gateway.process(method, amount).await;
        self.last_payment = Some(result.clone());
        result
    }

    fn mint_order_id(&self) -> String {
        format!("ORD-{}", self.ids.suffix(ORDER_SUFFIX_LEN))
    }

    /// Assigns a fresh order id, replacing any previous one.
    pub fn generate_order_id(&mut self) -> String {
        let order_id = self.mint_order_id();
        tracing::info!(%order_id, "order id generated");
        self.order_id = Some(order_id.clone());
        order_id
    }

    fn compose_confirmation(
        &self,
        recipient: &str,
        order_id: Option<&str>,
        payment: Option<&PaymentResult>,
    ) -> OrderConfirmation {
        let discount = self
            .applied_discount_code()
            .map(|code| (code.to_string(), self.discount_amount()));
        OrderConfirmation::compose(
            recipient,
            order_id,
            self.items.as_slice(),
            discount.as_ref().map(|(code, amount)| (code.as_str(), *amount)),
            self.subtotal(),
            self.total(),
            payment,
        )
    }

    /// Composes the confirmation from the cart's current contents,
    /// delivers it, and records the recipient.
    pub async fn send_order_confirmation(&mut self, recipient: &str) {
        let confirmation = self.compose_confirmation(
            recipient,
            self.order_id.as_deref(),
            self.last_payment.as_ref(),
        );
        self.sender.deliver(&confirmation).await;
        self.email_sent_to = Some(recipient.to_string());
    }

    /// Runs the checkout sequence: assign an order id, price the cart,
    /// charge the total, send the confirmation.
    ///
    /// The confirmation goes out whether or not the charge was approved;
    /// a declined charge leaves the cart in [`CartState::Failed`] and the
    /// document simply has no transaction line.
    ///
    /// Every observable field commits after the last await, so a
    /// checkout future dropped mid-flight (a timeout, for instance)
    /// leaves the cart exactly as it was when the call began.
    #[tracing::instrument(skip(self))]
    pub async fn checkout(&mut self, recipient: &str, method: &str) {
        metrics::counter!("checkouts_total").increment(1);
        let start = std::time::Instant::now();

        let order_id = self.mint_order_id();
        tracing::info!(%order_id, "order id generated");
        let total = self.total();

        let payment = self.gateway.process(method, total).await;
        let confirmation =
            self.compose_confirmation(recipient, Some(order_id.as_str()), Some(&payment));
        self.sender.deliver(&confirmation).await;

        // No awaits past this point; the cart settles in a single poll.
        let outcome = if payment.is_success() {
            metrics::counter!("checkouts_completed").increment(1);
            CartState::Completed
        } else {
            metrics::counter!("checkouts_failed").increment(1);
            CartState::Failed
        };
        metrics::histogram!("checkout_duration_seconds").record(start.elapsed().as_secs_f64());
        tracing::info!(%order_id, state = %outcome, "checkout finished");

        self.order_id = Some(order_id);
        self.last_payment = Some(payment);
        self.email_sent_to = Some(recipient.to_string());
        self.state = outcome;
    }

    /// Returns the current order id, if one has been generated.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Returns the recipient of the most recent confirmation.
    pub fn email_sent_to(&self) -> Option<&str> {
        self.email_sent_to.as_deref()
    }

    /// Returns the most recent payment outcome.
    pub fn last_payment_result(&self) -> Option<&PaymentResult> {
        self.last_payment.as_ref()
    }

    /// Returns the cart lifecycle state.
    pub fn state(&self) -> CartState {
        self.state
    }
}
