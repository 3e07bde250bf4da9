//! Application Controller
//!
//! The UI's mutable state as an explicit state machine. The controller
//! performs no I/O: transitions that need the service layer return an
//! [`Effect`], and the caller feeds the result back through
//! [`Controller::apply`].

use crate::domain::{InventoryError, Product, ProductDraft, ProductId, Snapshot};

/// Which form the form page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing a copy of the product taken when the edit started
    Edit(Product),
}

/// Current page. The editing target only exists inside the form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Products,
    Form(FormMode),
}

/// Navigation targets offered by the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Products,
    NewProduct,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Products, Route::NewProduct];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Products => "Daftar Produk",
            Route::NewProduct => "Tambah Produk",
        }
    }

    fn page(self) -> Page {
        match self {
            Route::Dashboard => Page::Dashboard,
            Route::Products => Page::Products,
            Route::NewProduct => Page::Form(FormMode::Create),
        }
    }
}

impl Page {
    /// The sidebar entry this page highlights
    pub fn route(&self) -> Route {
        match self {
            Page::Dashboard => Route::Dashboard,
            Page::Products => Route::Products,
            Page::Form(_) => Route::NewProduct,
        }
    }
}

/// The service round trip currently outstanding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Initial,
    Saving,
    Deleting(ProductId),
    Resetting,
}

/// Delete confirmation bound to one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub target: ProductId,
    pub title: String,
    pub message: String,
}

impl Confirmation {
    fn delete(target: ProductId) -> Self {
        Self {
            target,
            title: "Konfirmasi Hapus".to_string(),
            message: "Apakah Anda yakin ingin menghapus produk ini? Tindakan ini tidak dapat dibatalkan."
                .to_string(),
        }
    }
}

/// Loading and confirming are exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Loading(Pending),
    Confirming(Confirmation),
}

/// Service operation requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Load,
    Upsert(ProductDraft),
    Remove(ProductId),
    Reset,
}

/// Result of running an [`Effect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Result<Snapshot, InventoryError>),
    Saved(Result<Snapshot, InventoryError>),
    Removed(Result<Snapshot, InventoryError>),
    Reset(Result<Snapshot, InventoryError>),
}

/// A transition that is not allowed in the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Busy,
    NotOnForm,
    UnknownProduct(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    page: Page,
    activity: Activity,
    snapshot: Snapshot,
    sidebar_open: bool,
    error: Option<InventoryError>,
    /// Last submitted draft, kept until the save succeeds
    unsaved: Option<ProductDraft>,
    /// The last load failed and may be retried
    load_failed: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            page: Page::Dashboard,
            activity: Activity::Idle,
            snapshot: Snapshot::default(),
            sidebar_open: false,
            error: None,
            unsaved: None,
            load_failed: false,
        }
    }
}

impl Controller {
    /// Fresh controller, already waiting for the initial load
    pub fn start() -> (Self, Effect) {
        let controller = Self {
            activity: Activity::Loading(Pending::Initial),
            ..Self::default()
        };
        (controller, Effect::Load)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn products(&self) -> &[Product] {
        &self.snapshot.products
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.activity, Activity::Loading(_))
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.activity {
            Activity::Confirming(c) => Some(c),
            _ => None,
        }
    }

    /// Product being edited, if the form page is in edit mode
    pub fn editing(&self) -> Option<&Product> {
        match &self.page {
            Page::Form(FormMode::Edit(p)) => Some(p),
            _ => None,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn error(&self) -> Option<&InventoryError> {
        self.error.as_ref()
    }

    /// Whether the banner should offer another load attempt. Corrupt data
    /// is not retried; it needs a reset.
    pub fn can_retry_load(&self) -> bool {
        self.load_failed
            && self
                .error
                .as_ref()
                .is_some_and(|e| !e.is_recoverable_by_reset())
    }

    /// Draft to restore into the form after a failed save
    pub fn unsaved_draft(&self) -> Option<&ProductDraft> {
        self.unsaved.as_ref()
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Change page; drops any editing target and closes the sidebar
    pub fn navigate(&mut self, route: Route) {
        self.page = route.page();
        self.sidebar_open = false;
        self.unsaved = None;
    }

    /// Open the form on a copy of the product
    pub fn edit(&mut self, id: &ProductId) -> Result<(), Rejected> {
        let product = self
            .snapshot
            .get(id)
            .cloned()
            .ok_or_else(|| Rejected::UnknownProduct(id.clone()))?;
        self.page = Page::Form(FormMode::Edit(product));
        self.sidebar_open = false;
        self.unsaved = None;
        Ok(())
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: ProductId) -> Result<(), Rejected> {
        if self.activity != Activity::Idle {
            return Err(Rejected::Busy);
        }
        if !self.snapshot.contains(&id) {
            return Err(Rejected::UnknownProduct(id));
        }
        self.activity = Activity::Confirming(Confirmation::delete(id));
        Ok(())
    }

    /// Close the modal without touching the collection
    pub fn cancel_delete(&mut self) {
        if matches!(self.activity, Activity::Confirming(_)) {
            self.activity = Activity::Idle;
        }
    }

    /// The only way a removal is issued
    pub fn confirm_delete(&mut self) -> Option<Effect> {
        let Activity::Confirming(confirmation) = &self.activity else {
            return None;
        };
        let target = confirmation.target.clone();
        self.activity = Activity::Loading(Pending::Deleting(target.clone()));
        Some(Effect::Remove(target))
    }

    /// Submit the form. In edit mode the draft is bound to the product being
    /// edited, whatever id it carried.
    pub fn submit(&mut self, mut draft: ProductDraft) -> Result<Effect, Rejected> {
        if self.activity != Activity::Idle {
            return Err(Rejected::Busy);
        }
        match &self.page {
            Page::Form(FormMode::Create) => {
                draft.id = None;
                draft.base_version = None;
            }
            Page::Form(FormMode::Edit(product)) => {
                draft.id = Some(product.id.clone());
                draft.base_version = Some(product.version);
            }
            _ => return Err(Rejected::NotOnForm),
        }
        self.unsaved = Some(draft.clone());
        self.activity = Activity::Loading(Pending::Saving);
        Ok(Effect::Upsert(draft))
    }

    /// Reload from storage
    pub fn reload(&mut self) -> Result<Effect, Rejected> {
        if self.activity != Activity::Idle {
            return Err(Rejected::Busy);
        }
        self.error = None;
        self.activity = Activity::Loading(Pending::Initial);
        Ok(Effect::Load)
    }

    /// Re-seed the store, e.g. after a corrupt load
    pub fn reset(&mut self) -> Result<Effect, Rejected> {
        if self.activity != Activity::Idle {
            return Err(Rejected::Busy);
        }
        self.error = None;
        self.activity = Activity::Loading(Pending::Resetting);
        Ok(Effect::Reset)
    }

    /// Feed back the result of an effect
    pub fn apply(&mut self, outcome: Outcome) {
        self.activity = Activity::Idle;
        match outcome {
            Outcome::Loaded(result) => {
                self.load_failed = result.is_err();
                self.accept(result, false);
            }
            Outcome::Removed(result) => self.accept(result, false),
            // A reset may have started from an unreadable index, so its
            // revision restarts and must not be compared with ours.
            Outcome::Reset(result) => self.accept(result, true),
            Outcome::Saved(result) => {
                let saved = result.is_ok();
                self.accept(result, false);
                if saved {
                    self.unsaved = None;
                    if matches!(self.page, Page::Form(_)) {
                        self.navigate(Route::Products);
                    }
                }
            }
        }
    }

    fn accept(&mut self, result: Result<Snapshot, InventoryError>, replace: bool) {
        match result {
            Ok(snapshot) => {
                self.load_failed = false;
                if replace || snapshot.revision >= self.snapshot.revision {
                    self.snapshot = snapshot;
                } else {
                    tracing::debug!(
                        stale = snapshot.revision,
                        current = self.snapshot.revision,
                        "ignoring stale snapshot"
                    );
                }
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "service operation failed");
                self.error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::default_products;

    fn loaded() -> Controller {
        let (mut c, effect) = Controller::start();
        assert_eq!(effect, Effect::Load);
        c.apply(Outcome::Loaded(Ok(Snapshot::new(1, default_products()))));
        c
    }

    fn p(id: &str) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn test_start_is_loading_dashboard() {
        let (c, _) = Controller::start();
        assert!(c.is_loading());
        assert_eq!(c.page(), &Page::Dashboard);
        assert!(c.confirmation().is_none());
    }

    #[test]
    fn test_navigate_clears_edit_and_sidebar() {
        let mut c = loaded();
        c.set_sidebar_open(true);
        c.edit(&p("p2")).unwrap();
        assert_eq!(c.editing().map(|p| p.name.as_str()), Some("Keyboard Mekanikal"));

        c.set_sidebar_open(true);
        c.navigate(Route::Dashboard);
        assert!(c.editing().is_none());
        assert!(!c.sidebar_open());
    }

    #[test]
    fn test_new_product_route_has_no_target() {
        let mut c = loaded();
        c.edit(&p("p1")).unwrap();
        c.navigate(Route::NewProduct);
        assert_eq!(c.page(), &Page::Form(FormMode::Create));
        assert_eq!(c.page().route(), Route::NewProduct);
    }

    #[test]
    fn test_cancel_never_removes() {
        let mut c = loaded();
        c.request_delete(p("p1")).unwrap();
        assert_eq!(c.confirmation().map(|m| &m.target), Some(&p("p1")));

        c.cancel_delete();
        assert_eq!(c.activity(), &Activity::Idle);
        assert_eq!(c.products().len(), 5);
    }

    #[test]
    fn test_confirm_without_modal_does_nothing() {
        let mut c = loaded();
        assert_eq!(c.confirm_delete(), None);
    }

    #[test]
    fn test_confirm_issues_remove_and_closes_modal() {
        let mut c = loaded();
        c.request_delete(p("p3")).unwrap();

        let effect = c.confirm_delete();
        assert_eq!(effect, Some(Effect::Remove(p("p3"))));
        assert!(c.confirmation().is_none());
        assert_eq!(c.activity(), &Activity::Loading(Pending::Deleting(p("p3"))));
    }

    #[test]
    fn test_delete_request_rejected_while_loading() {
        let (mut c, _) = Controller::start();
        assert_eq!(c.request_delete(p("p1")), Err(Rejected::Busy));
    }

    #[test]
    fn test_submit_binds_edit_target() {
        let mut c = loaded();
        c.edit(&p("p4")).unwrap();

        let draft = ProductDraft::full(Some(p("forged")), "Monitor", "Elektronik", 9, 1);
        let Ok(Effect::Upsert(sent)) = c.submit(draft) else {
            panic!("expected upsert");
        };
        assert_eq!(sent.id, Some(p("p4")));
        assert_eq!(sent.base_version, Some(1));
        assert!(c.is_loading());
    }

    #[test]
    fn test_submit_outside_form_rejected() {
        let mut c = loaded();
        let draft = ProductDraft::full(None, "X", "Y", 1, 1);
        assert_eq!(c.submit(draft), Err(Rejected::NotOnForm));
    }

    #[test]
    fn test_save_navigates_to_products() {
        let mut c = loaded();
        c.navigate(Route::NewProduct);
        c.submit(ProductDraft::full(None, "Pen", "ATK", 1, 1)).unwrap();

        let mut products = default_products();
        products.push(Product::new("p9", "Pen", "ATK", 1, 1));
        c.apply(Outcome::Saved(Ok(Snapshot::new(2, products))));

        assert_eq!(c.page(), &Page::Products);
        assert_eq!(c.products().len(), 6);
    }

    #[test]
    fn test_save_keeps_page_user_moved_to() {
        let mut c = loaded();
        c.navigate(Route::NewProduct);
        c.submit(ProductDraft::full(None, "Pen", "ATK", 1, 1)).unwrap();
        c.navigate(Route::Dashboard);

        c.apply(Outcome::Saved(Ok(Snapshot::new(2, default_products()))));
        assert_eq!(c.page(), &Page::Dashboard);
    }

    #[test]
    fn test_failed_save_stays_on_form() {
        let mut c = loaded();
        c.navigate(Route::NewProduct);
        c.submit(ProductDraft::full(None, "Pen", "ATK", 1, 1)).unwrap();

        c.apply(Outcome::Saved(Err(InventoryError::Storage("full".into()))));
        assert_eq!(c.page(), &Page::Form(FormMode::Create));
        assert!(c.error().is_some());
        assert_eq!(c.activity(), &Activity::Idle);
        assert_eq!(c.unsaved_draft().and_then(|d| d.name.as_deref()), Some("Pen"));

        c.navigate(Route::Products);
        assert!(c.unsaved_draft().is_none());
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let mut c = loaded();
        c.apply(Outcome::Removed(Ok(Snapshot::new(5, vec![]))));
        c.apply(Outcome::Saved(Ok(Snapshot::new(3, default_products()))));
        assert_eq!(c.revision(), 5);
        assert!(c.products().is_empty());
    }

    #[test]
    fn test_reset_clears_error() {
        let (mut c, _) = Controller::start();
        c.apply(Outcome::Loaded(Err(InventoryError::corrupt("k", "bad"))));
        assert!(c.error().is_some_and(InventoryError::is_recoverable_by_reset));

        assert_eq!(c.reset(), Ok(Effect::Reset));
        assert!(c.error().is_none());
        c.apply(Outcome::Reset(Ok(Snapshot::new(1, default_products()))));
        assert_eq!(c.products().len(), 5);
    }

    #[test]
    fn test_reset_replaces_newer_snapshot() {
        let mut c = loaded();
        c.apply(Outcome::Removed(Ok(Snapshot::new(7, vec![]))));
        assert_eq!(c.reset(), Ok(Effect::Reset));

        c.apply(Outcome::Reset(Ok(Snapshot::new(1, default_products()))));
        assert_eq!(c.revision(), 1);
        assert_eq!(c.products(), default_products().as_slice());
    }

    #[test]
    fn test_failed_load_can_be_retried() {
        let (mut c, _) = Controller::start();
        c.apply(Outcome::Loaded(Err(InventoryError::Storage("disabled".into()))));
        assert!(c.can_retry_load());

        assert_eq!(c.reload(), Ok(Effect::Load));
        assert!(c.error().is_none());
        assert!(c.is_loading());

        c.apply(Outcome::Loaded(Ok(Snapshot::new(1, default_products()))));
        assert!(!c.can_retry_load());
        assert_eq!(c.products().len(), 5);
    }

    #[test]
    fn test_corrupt_load_offers_reset_not_retry() {
        let (mut c, _) = Controller::start();
        c.apply(Outcome::Loaded(Err(InventoryError::corrupt("k", "bad"))));
        assert!(!c.can_retry_load());
    }

    #[test]
    fn test_failed_save_is_not_a_load_retry() {
        let mut c = loaded();
        c.navigate(Route::NewProduct);
        c.submit(ProductDraft::full(None, "Pen", "ATK", 1, 1)).unwrap();
        c.apply(Outcome::Saved(Err(InventoryError::Storage("full".into()))));
        assert!(!c.can_retry_load());
    }
}
