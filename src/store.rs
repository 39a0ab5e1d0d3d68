//! The shop store - one object owning every collection.
//!
//! All mutations are synchronous `&mut self` methods. Checkout books its
//! income in the ledger through the store, and barcode detectors feed the
//! cart through it. For use from several tasks, wrap the store with
//! [`Shop::into_shared`].

use crate::{
    advisor::{AdvisorChat, TextGenerator},
    config::{AppConfig, ShopSettings},
    core::{
        cart::{Cart, CheckoutOutcome, Sale},
        catalog::{Catalog, ProductEdit},
        customers::CustomerDirectory,
        ledger::{Ledger, LedgerTotals},
        notify,
        report::{self, DashboardSummary, JobCard},
        tracker::{JobBoard, compute_progress},
    },
    entities::{
        Customer, CustomerDraft, Job, Product, ProductDraft, ServiceHistoryItem, StepDraft,
        Transaction, VehicleIntake,
    },
    errors::Result,
    scanner::{CameraScanner, Key, KeystrokeScanner, SymbolDecoder, VideoSource},
};
use chrono::NaiveDate;
use std::{sync::Arc, time::Instant};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// A shop shared between tasks.
pub type SharedShop = Arc<RwLock<Shop>>;

/// What happened when the cart was asked to close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleStatus {
    /// The cart was empty; nothing was booked
    EmptyCart,
    /// The cart holds services; submit an intake sheet to finish
    IntakeRequired,
    /// The sale was booked at the head of the ledger
    Recorded {
        /// The booked income transaction
        transaction: Transaction,
        /// Intake sheet, for sales with services
        intake: Option<VehicleIntake>,
    },
}

/// Every collection of the shop plus the transient point-of-sale state.
#[derive(Debug, Clone)]
pub struct Shop {
    settings: ShopSettings,
    catalog: Catalog,
    customers: CustomerDirectory,
    jobs: JobBoard,
    cart: Cart,
    ledger: Ledger,
    logbook: Vec<ServiceHistoryItem>,
    keystrokes: KeystrokeScanner,
    camera: CameraScanner,
    advisor: AdvisorChat,
}

impl Shop {
    /// Builds and seeds a shop from configuration.
    ///
    /// Jobs are opened after customers, so a job seed may refer to the
    /// 1-based position of a customer seed.
    ///
    /// # Errors
    /// Returns a validation error if any seed record is malformed, or
    /// [`crate::errors::Error::DuplicateBarcode`] for conflicting product seeds.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut catalog = Catalog::default();
        for draft in &config.products {
            catalog.create(draft.clone())?;
        }

        let mut customers = CustomerDirectory::default();
        for draft in &config.customers {
            customers.add(draft.clone())?;
        }

        let mut jobs = JobBoard::default();
        for seed in &config.jobs {
            jobs.open_job(seed.customer_id, &seed.bay, seed.steps.clone())?;
        }

        info!(
            shop = %config.shop.name,
            products = catalog.products().len(),
            customers = customers.len(),
            jobs = jobs.jobs().len(),
            "Shop seeded"
        );

        Ok(Self {
            settings: config.shop.clone(),
            catalog,
            customers,
            jobs,
            cart: Cart::default(),
            ledger: Ledger::default(),
            logbook: config.logbook.clone(),
            keystrokes: KeystrokeScanner::new(config.scanner.keystroke_threshold()),
            camera: CameraScanner::new(config.scanner.camera_interval()),
            advisor: AdvisorChat::new(&config.advisor.greeting),
        })
    }

    /// Wraps the shop for shared access from several tasks.
    #[must_use]
    pub fn into_shared(self) -> SharedShop {
        Arc::new(RwLock::new(self))
    }

    // --- Accessors ---

    /// Shop identity settings.
    #[must_use]
    pub const fn settings(&self) -> &ShopSettings {
        &self.settings
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The customer directory.
    #[must_use]
    pub const fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    /// Every job on the board.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        self.jobs.jobs()
    }

    /// The in-progress sale.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The accounting ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Vehicle service history.
    #[must_use]
    pub fn logbook(&self) -> &[ServiceHistoryItem] {
        &self.logbook
    }

    /// The advisor chat.
    #[must_use]
    pub const fn advisor(&self) -> &AdvisorChat {
        &self.advisor
    }

    // --- Job tracking ---

    /// Opens a job for a customer.
    ///
    /// # Errors
    /// Returns a validation error for a blank bay or step name.
    pub fn open_job(&mut self, customer_id: i64, bay: &str, steps: Vec<StepDraft>) -> Result<&Job> {
        self.jobs.open_job(customer_id, bay, steps)
    }

    /// Flips one step of one job. Returns `false` if either does not exist.
    pub fn toggle_step(&mut self, job_id: i64, step_id: i64) -> bool {
        self.jobs.toggle_step(job_id, step_id)
    }

    /// Dashboard card for one job.
    #[must_use]
    pub fn job_card(&self, job_id: i64) -> Option<JobCard> {
        self.jobs
            .get(job_id)
            .map(|job| report::job_card(job, &self.customers))
    }

    /// Dashboard cards for every job.
    #[must_use]
    pub fn job_cards(&self) -> Vec<JobCard> {
        self.jobs
            .jobs()
            .iter()
            .map(|job| report::job_card(job, &self.customers))
            .collect()
    }

    /// Headline dashboard numbers.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSummary {
        report::dashboard(self.jobs.jobs(), &self.customers, &self.ledger)
    }

    // --- Point of sale ---

    /// Adds one unit of a catalog product to the cart. Returns `false` for an unknown id.
    pub fn add_to_cart(&mut self, product_id: i64) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            debug!(product_id, "add_to_cart: no such product");
            return false;
        };
        self.cart.add_to_cart(product);
        true
    }

    /// Changes a cart line's quantity by `delta`; zero or below removes the line.
    pub fn update_quantity(&mut self, product_id: i64, delta: i64) {
        self.cart.update_quantity(product_id, delta);
    }

    /// Adds the product carrying `code` to the cart. Unmatched codes are ignored.
    pub fn add_by_barcode(&mut self, code: &str) -> bool {
        let Some(product) = self.catalog.find_by_barcode(code) else {
            debug!(barcode = %code.trim(), "Scanned code matches no product");
            return false;
        };
        info!(barcode = %code.trim(), product_id = product.id, "Scanned product added to cart");
        self.cart.add_to_cart(product);
        true
    }

    /// Feeds one key to the keyboard-wedge detector.
    ///
    /// Returns `true` when the key completed a scan that matched a product.
    pub fn handle_keystroke(&mut self, key: Key, at: Instant) -> bool {
        self.keystrokes
            .feed(key, at)
            .is_some_and(|code| self.add_by_barcode(&code))
    }

    /// Runs the camera detector and adds the decoded product to the cart.
    ///
    /// Returns the decoded code (matched or not), or `None` if cancelled.
    pub async fn scan_with_camera<S, D>(
        &mut self,
        source: S,
        decoder: &D,
        cancel: &CancellationToken,
    ) -> Option<String>
    where
        S: VideoSource,
        D: SymbolDecoder + ?Sized,
    {
        let code = self.camera.scan(source, decoder, cancel).await?;
        self.add_by_barcode(&code);
        Some(code)
    }

    /// Tries to close the sale, booking it on `date` when no intake is needed.
    ///
    /// # Arguments
    /// * `date` - Booking date for the income transaction
    ///
    /// # Returns
    /// * `Ok(SaleStatus::EmptyCart)` - Nothing to sell
    /// * `Ok(SaleStatus::IntakeRequired)` - The cart holds a service; the
    ///   intake sheet is now open and the cart is kept
    /// * `Ok(SaleStatus::Recorded { .. })` - The sale was booked and the cart cleared
    ///
    /// # Errors
    /// Returns a validation error if the sale cannot be booked.
    pub fn checkout(&mut self, date: NaiveDate) -> Result<SaleStatus> {
        let outcome = self.cart.checkout(date);
        self.settle(outcome)
    }

    /// Completes the intake sheet and books the pending sale.
    ///
    /// # Errors
    /// Returns a validation error, booking nothing, if no intake sheet is open
    /// or the sheet has no plate.
    pub fn submit_intake(&mut self, intake: VehicleIntake, date: NaiveDate) -> Result<SaleStatus> {
        let outcome = self.cart.submit_intake(intake, date)?;
        self.settle(outcome)
    }

    /// Closes the intake sheet; the cart keeps its lines.
    pub fn cancel_intake(&mut self) {
        self.cart.cancel_intake();
    }

    fn settle(&mut self, outcome: CheckoutOutcome) -> Result<SaleStatus> {
        match outcome {
            CheckoutOutcome::EmptyCart => Ok(SaleStatus::EmptyCart),
            CheckoutOutcome::IntakeRequired => Ok(SaleStatus::IntakeRequired),
            CheckoutOutcome::Completed(Sale {
                transaction, intake, ..
            }) => {
                let transaction = self.ledger.add_transaction(transaction)?.clone();
                if let Some(intake) = &intake {
                    info!(plate = %intake.normalized_plate(), "Vehicle intake recorded");
                }
                Ok(SaleStatus::Recorded { transaction, intake })
            }
        }
    }

    // --- Ledger ---

    /// Books an expense typed into the expense form.
    ///
    /// # Errors
    /// Returns a validation error for a blank description or category, and
    /// [`crate::errors::Error::InvalidAmount`] for a blank or non-numeric amount.
    pub fn record_expense(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
        date: NaiveDate,
    ) -> Result<Transaction> {
        self.ledger
            .record_expense(description, amount, category, date)
            .cloned()
    }

    /// Income, expense and balance.
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        self.ledger.totals()
    }

    // --- Catalog ---

    /// Adds a product to the catalog.
    ///
    /// # Errors
    /// Returns a validation error for malformed fields and
    /// [`crate::errors::Error::DuplicateBarcode`] for a taken barcode.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        self.catalog.create(draft)
    }

    /// Applies a partial edit to a product. `Ok(None)` if it does not exist.
    ///
    /// # Errors
    /// Same as [`Catalog::update`].
    pub fn update_product(&mut self, product_id: i64, edit: ProductEdit) -> Result<Option<&Product>> {
        self.catalog.update(product_id, edit)
    }

    /// Deletes a product once `confirm` approves it.
    ///
    /// Lines already in the cart keep their snapshot of the product.
    pub fn delete_product(&mut self, product_id: i64, confirm: impl FnOnce(&Product) -> bool) -> Option<Product> {
        self.catalog.delete(product_id, confirm)
    }

    // --- Customers ---

    /// Adds a customer.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<&Customer> {
        self.customers.add(draft)
    }

    /// Replaces a customer's record. `Ok(None)` if it does not exist.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank.
    pub fn update_customer(&mut self, customer_id: i64, draft: CustomerDraft) -> Result<Option<&Customer>> {
        self.customers.update(customer_id, draft)
    }

    /// Deletes a customer once `confirm` approves it. Their jobs stay on the board.
    pub fn delete_customer(
        &mut self,
        customer_id: i64,
        confirm: impl FnOnce(&Customer) -> bool,
    ) -> Option<Customer> {
        self.customers.delete(customer_id, confirm)
    }

    // --- Messaging ---

    /// Greeting link for a customer, or `None` if the customer does not exist.
    ///
    /// # Errors
    /// Returns an error if the customer has no phone digits or the messaging
    /// host is invalid.
    pub fn contact_link(&self, customer_id: i64) -> Result<Option<String>> {
        let Some(customer) = self.customers.get(customer_id) else {
            return Ok(None);
        };
        let message = notify::contact_message(&self.settings.name, customer);
        notify::deep_link(&self.settings.messaging_host, &customer.phone, &message).map(Some)
    }

    /// Progress update link for a job's customer.
    ///
    /// Returns `None` if the job does not exist or its customer is gone.
    ///
    /// # Errors
    /// Returns an error if the customer has no phone digits or the messaging
    /// host is invalid.
    pub fn progress_link(&self, job_id: i64) -> Result<Option<String>> {
        self.job_link(job_id, notify::progress_message)
    }

    /// Quick update link from a dashboard card.
    ///
    /// Returns `None` if the job does not exist or its customer is gone.
    ///
    /// # Errors
    /// Returns an error if the customer has no phone digits or the messaging
    /// host is invalid.
    pub fn dashboard_link(&self, job_id: i64) -> Result<Option<String>> {
        self.job_link(job_id, notify::dashboard_message)
    }

    fn job_link(
        &self,
        job_id: i64,
        template: fn(&str, &Customer, Option<u8>) -> String,
    ) -> Result<Option<String>> {
        let Some((job, customer)) = self
            .jobs
            .get(job_id)
            .and_then(|job| self.customers.get(job.customer_id).map(|c| (job, c)))
        else {
            return Ok(None);
        };
        let message = template(&self.settings.name, customer, compute_progress(job));
        notify::deep_link(&self.settings.messaging_host, &customer.phone, &message).map(Some)
    }
}

/// Runs the camera detector without holding the store lock, then adds the
/// decoded product to the shared cart.
pub async fn scan_into_shared<S, D>(
    shop: &SharedShop,
    source: S,
    decoder: &D,
    cancel: &CancellationToken,
) -> Option<String>
where
    S: VideoSource,
    D: SymbolDecoder + ?Sized,
{
    let camera = shop.read().await.camera;
    let code = camera.scan(source, decoder, cancel).await?;
    shop.write().await.add_by_barcode(&code);
    Some(code)
}

/// Asks the advisor a question on a shared shop.
///
/// The store lock is taken to accept the question and again to deliver the
/// reply, but never held while the service is working, so jobs, cart and
/// ledger stay usable meanwhile. Firing `cancel` aborts the call and cancels
/// the request.
///
/// Returns `true` if a reply was appended to the transcript.
pub async fn ask_advisor_shared(
    shop: &SharedShop,
    generator: &dyn TextGenerator,
    message: &str,
    cancel: &CancellationToken,
) -> bool {
    let Some(request) = shop.write().await.advisor.begin(message) else {
        return false;
    };
    debug!("Advisor question sent");

    tokio::select! {
        () = cancel.cancelled() => {
            shop.write().await.advisor.cancel_request(request.id);
            false
        }
        result = generator.generate(&request.prompt) => {
            shop.write().await.advisor.complete(request.id, result)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::{
        core::{cart::SALES_CATEGORY, report::NO_VEHICLE},
        entities::{ProductKind, TransactionKind},
        errors::Error,
        scanner::Frame,
        test_utils::{demo_shop, init_test_tracing, test_date},
    };
    use std::time::Duration;

    fn product_id(shop: &Shop, name: &str) -> i64 {
        shop.catalog()
            .products()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn test_seeded_shop() {
        let shop = demo_shop();
        assert_eq!(shop.catalog().products().len(), 3);
        assert_eq!(shop.customers().len(), 2);
        assert_eq!(shop.jobs().len(), 1);
        assert_eq!(shop.logbook().len(), 4);
        assert!(shop.ledger().is_empty());
        assert_eq!(shop.advisor().transcript().len(), 1);

        let card = shop.job_card(1).unwrap();
        assert_eq!(card.customer_name.as_deref(), Some("Juan Pérez"));
        assert_eq!(card.vehicle, "Porsche 911 GT3 RS");
        assert_eq!(card.progress, Some(33));
    }

    #[test]
    fn test_service_sale_needs_intake_then_books_income() {
        init_test_tracing();
        let mut shop = demo_shop();
        let ceramic = product_id(&shop, "Cerámico Graphene 9H");
        assert!(shop.add_to_cart(ceramic));

        assert_eq!(shop.checkout(test_date()).unwrap(), SaleStatus::IntakeRequired);
        assert!(shop.ledger().is_empty());

        let status = shop
            .submit_intake(VehicleIntake::for_plate("ABCD12"), test_date())
            .unwrap();
        let SaleStatus::Recorded { transaction, intake } = status else {
            panic!("intake should book the sale");
        };
        assert_eq!(transaction.amount, 450_000);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.category, SALES_CATEGORY);
        assert_eq!(intake.unwrap().plate, "ABCD12");

        assert_eq!(shop.ledger().len(), 1);
        assert_eq!(shop.ledger().transactions()[0], transaction);
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_rejected_intake_books_nothing() {
        let mut shop = demo_shop();
        shop.add_to_cart(product_id(&shop, "Corrección Pintura (Etapa 2)"));
        shop.checkout(test_date()).unwrap();

        let result = shop.submit_intake(VehicleIntake::default(), test_date());
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(shop.ledger().is_empty());
        assert_eq!(shop.cart().lines().len(), 1);
    }

    #[test]
    fn test_goods_sale_books_immediately() {
        let mut shop = demo_shop();
        let shampoo = product_id(&shop, "Shampoo pH Neutro");
        shop.add_to_cart(shampoo);
        shop.update_quantity(shampoo, 1);

        let status = shop.checkout(test_date()).unwrap();
        assert!(matches!(status, SaleStatus::Recorded { intake: None, .. }));
        assert_eq!(shop.totals().income, 31_800);
        assert_eq!(shop.ledger().transactions()[0].description, "2x Shampoo pH Neutro");
    }

    #[test]
    fn test_empty_checkout_leaves_ledger() {
        let mut shop = demo_shop();
        assert_eq!(shop.checkout(test_date()).unwrap(), SaleStatus::EmptyCart);
        assert!(shop.ledger().is_empty());
    }

    #[test]
    fn test_add_by_barcode() {
        let mut shop = demo_shop();
        assert!(shop.add_by_barcode("78000000001"));
        assert_eq!(shop.cart().lines().len(), 1);
        assert_eq!(shop.cart().lines()[0].product.name, "Shampoo pH Neutro");
        assert_eq!(shop.cart().lines()[0].quantity, 1);

        let before = shop.cart().lines().to_vec();
        assert!(!shop.add_by_barcode("000000000"));
        assert_eq!(shop.cart().lines(), before.as_slice());
    }

    #[test]
    fn test_keystroke_scan_adds_to_cart() {
        let mut shop = demo_shop();
        let start = Instant::now();
        let mut at = start;
        for ch in "78000000001".chars() {
            at += Duration::from_millis(8);
            assert!(!shop.handle_keystroke(Key::Char(ch), at));
        }
        assert!(shop.handle_keystroke(Key::Enter, at + Duration::from_millis(8)));
        assert_eq!(shop.cart().total(), 15_900);
    }

    struct StillFrame;

    impl VideoSource for StillFrame {
        fn capture(&mut self) -> Option<Frame> {
            Some(Frame {
                width: 1,
                height: 1,
                data: vec![0],
            })
        }

        fn release(&mut self) {}
    }

    struct ShampooLabel;

    impl SymbolDecoder for ShampooLabel {
        fn decode(&self, _frame: &Frame) -> Option<String> {
            Some("78000000001".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_scan_adds_to_cart() {
        let mut shop = demo_shop();
        let cancel = CancellationToken::new();
        let code = shop.scan_with_camera(StillFrame, &ShampooLabel, &cancel).await;
        assert_eq!(code.as_deref(), Some("78000000001"));
        assert_eq!(shop.cart().lines().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_scan_into_shared_shop() {
        let shop = demo_shop().into_shared();
        let cancel = CancellationToken::new();
        scan_into_shared(&shop, StillFrame, &ShampooLabel, &cancel).await;
        assert_eq!(shop.read().await.cart().total(), 15_900);
    }

    /// Answers after a fixed delay.
    struct SlowAdvisor(Duration);

    #[async_trait::async_trait]
    impl TextGenerator for SlowAdvisor {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            tokio::time::sleep(self.0).await;
            Ok("Un cerámico 9H.".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_advisor_question_does_not_block_shop() {
        let shop = demo_shop().into_shared();
        let cancel = CancellationToken::new();

        let asking = {
            let shop = Arc::clone(&shop);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                ask_advisor_shared(&shop, &SlowAdvisor(Duration::from_secs(30)), "¿PPF?", &cancel).await
            })
        };
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(shop.read().await.advisor().is_busy());

        let started = tokio::time::Instant::now();
        assert!(shop.write().await.toggle_step(1, 2));
        assert!(started.elapsed() < Duration::from_secs(1));

        assert!(asking.await.unwrap());
        let shop = shop.read().await;
        assert!(!shop.advisor().is_busy());
        assert_eq!(shop.advisor().transcript().last().unwrap().text, "Un cerámico 9H.");
        assert_eq!(shop.job_card(1).unwrap().progress, Some(67));
    }

    #[tokio::test(start_paused = true)]
    async fn test_advisor_question_cancelled_by_token() {
        let shop = demo_shop().into_shared();
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        assert!(!ask_advisor_shared(&shop, &SlowAdvisor(Duration::from_secs(30)), "¿PPF?", &cancel).await);
        let shop = shop.read().await;
        assert!(!shop.advisor().is_busy());
        assert_eq!(shop.advisor().transcript().len(), 2);
        assert_eq!(shop.advisor().transcript()[1].text, "¿PPF?");
    }

    #[tokio::test]
    async fn test_shared_shop_concurrent_toggles() {
        let shop = demo_shop().into_shared();
        let handles: Vec<_> = (2..=3)
            .map(|step| {
                let shop = Arc::clone(&shop);
                tokio::spawn(async move { shop.write().await.toggle_step(1, step) })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap());
        }
        let card = shop.read().await.job_card(1).unwrap();
        assert_eq!(card.progress, Some(100));
        assert!(card.finished);
    }

    #[test]
    fn test_expense_and_balance() {
        let mut shop = demo_shop();
        shop.add_by_barcode("78000000001");
        shop.checkout(test_date()).unwrap();
        shop.record_expense("Arriendo", "20.000", "Fijos", test_date())
            .unwrap();

        let totals = shop.totals();
        assert_eq!(totals.income, 15_900);
        assert_eq!(totals.expense, 20_000);
        assert_eq!(totals.balance, -4_100);
        assert_eq!(shop.dashboard().totals, totals);
        assert_eq!(shop.ledger().transactions()[0].kind, TransactionKind::Expense);
    }

    #[test]
    fn test_deleted_customer_degrades_job_card() {
        let mut shop = demo_shop();
        assert!(shop.delete_customer(1, |_| false).is_none());
        assert!(shop.delete_customer(1, |c| c.name == "Juan Pérez").is_some());

        let card = shop.job_card(1).unwrap();
        assert_eq!(card.customer_name, None);
        assert_eq!(card.vehicle, NO_VEHICLE);
        assert_eq!(shop.progress_link(1).unwrap(), None);
    }

    #[test]
    fn test_messaging_links() {
        let shop = demo_shop();
        let link = shop.contact_link(2).unwrap().unwrap();
        assert!(link.starts_with("https://wa.me/56987654321?text="));
        assert_eq!(shop.contact_link(99).unwrap(), None);

        let link = shop.progress_link(1).unwrap().unwrap();
        assert!(link.starts_with("https://wa.me/56912345678?text="));
    }

    #[test]
    fn test_dashboard_link_reports_job_progress() {
        let shop = demo_shop();
        let progress = shop.job_card(1).unwrap().progress.unwrap();

        let link = shop.dashboard_link(1).unwrap().unwrap();
        assert!(link.starts_with("https://wa.me/56912345678?text="));
        let parsed = reqwest::Url::parse(&link).unwrap();
        let (_, text) = parsed.query_pairs().next().unwrap();
        assert!(text.contains(&format!("ya lleva un *{progress}%* de avance en su servicio actual")));

        assert_eq!(shop.dashboard_link(99).unwrap(), None);
    }

    #[test]
    fn test_catalog_through_store() {
        let mut shop = demo_shop();
        let id = shop
            .create_product(ProductDraft {
                name: "Polera Apex".to_string(),
                price: 19_990,
                category: "Merch".to_string(),
                icon: "checkroom".to_string(),
                kind: ProductKind::Good,
                barcode: Some("APEX001".to_string()),
            })
            .unwrap()
            .id;
        assert!(shop.catalog().categories().contains(&"Merch"));

        let edit = ProductEdit {
            price: Some(17_990),
            ..ProductEdit::default()
        };
        assert_eq!(shop.update_product(id, edit).unwrap().unwrap().price, 17_990);

        shop.add_by_barcode("APEX001");
        assert!(shop.delete_product(id, |_| true).is_some());
        assert!(!shop.add_by_barcode("APEX001"));
        assert_eq!(shop.cart().total(), 17_990);
    }

    #[test]
    fn test_from_config_rejects_bad_seed() {
        let mut config = AppConfig::default();
        config.customers[0].name = "  ".to_string();
        assert!(Shop::from_config(&config).is_err());
    }
}
