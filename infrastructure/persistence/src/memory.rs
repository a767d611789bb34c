use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::price_list::model::{NewPriceEntry, Page, PriceEntry, PriceFilter};
use business::domain::price_list::repository::PriceListRepository;
use business::domain::pricing::model::Candidate;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ValidityWindow;
use business::domain::supplier::model::{NewSupplier, Supplier};
use business::domain::supplier::repository::SupplierRepository;

#[derive(Default)]
struct State {
    suppliers: Vec<Supplier>,
    entries: Vec<PriceEntry>,
    next_supplier_id: i32,
    next_entry_id: i32,
}

impl State {
    fn overlaps_stored(&self, supplier_id: i32, sku: &str, window: &ValidityWindow) -> bool {
        self.entries.iter().any(|e| {
            e.supplier_id == supplier_id && e.sku == sku && e.window.overlaps(window)
        })
    }
}

/// Process-local store backing both repository ports.
///
/// Applies the same rules as the SQL schema: entries must reference an existing supplier,
/// stored windows never overlap per supplier and SKU, and deleting a supplier drops its entries.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError> {
        Ok(self.state.read().await.suppliers.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Supplier, RepositoryError> {
        self.state
            .read()
            .await
            .suppliers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError> {
        let mut state = self.state.write().await;
        state.next_supplier_id += 1;
        let created = Supplier::from_new(state.next_supplier_id, supplier.clone());
        state.suppliers.push(created.clone());
        Ok(created)
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let stored = state
            .suppliers
            .iter_mut()
            .find(|s| s.id == supplier.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = supplier.clone();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.suppliers.len();
        state.suppliers.retain(|s| s.id != id);
        if state.suppliers.len() == before {
            return Err(RepositoryError::NotFound);
        }
        state.entries.retain(|e| e.supplier_id != id);
        Ok(())
    }
}

#[async_trait]
impl PriceListRepository for InMemoryStore {
    async fn get_candidates(
        &self,
        sku: &str,
        quantity: i32,
        date: NaiveDate,
    ) -> Result<Vec<Candidate>, RepositoryError> {
        let state = self.state.read().await;
        let candidates = state
            .entries
            .iter()
            .filter(|e| e.sku == sku && e.window.contains(date) && e.min_qty <= quantity)
            .filter_map(|e| {
                state
                    .suppliers
                    .iter()
                    .find(|s| s.id == e.supplier_id && s.active)
                    .map(|s| Candidate {
                        entry: e.clone(),
                        supplier: s.offer(),
                    })
            })
            .collect();
        Ok(candidates)
    }

    async fn has_overlap(
        &self,
        supplier_id: i32,
        sku: &str,
        window: ValidityWindow,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .overlaps_stored(supplier_id, sku, &window))
    }

    async fn add_batch(&self, entries: &[NewPriceEntry]) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;

        for (i, entry) in entries.iter().enumerate() {
            let known_supplier = state.suppliers.iter().any(|s| s.id == entry.supplier_id);
            let clashes = state.overlaps_stored(entry.supplier_id, &entry.sku, &entry.window)
                || entries[..i].iter().any(|earlier| earlier.conflicts_with(entry));
            if !known_supplier || clashes {
                tracing::warn!(
                    "Price list batch refused: supplier {} sku {} {}",
                    entry.supplier_id,
                    entry.sku,
                    entry.window
                );
                return Err(RepositoryError::Conflict);
            }
        }

        for entry in entries {
            state.next_entry_id += 1;
            let stored = PriceEntry::from_new(state.next_entry_id, entry.clone());
            state.entries.push(stored);
        }
        Ok(())
    }

    async fn list(&self, filter: &PriceFilter) -> Result<Page<PriceEntry>, RepositoryError> {
        let state = self.state.read().await;
        let mut matching: Vec<&PriceEntry> =
            state.entries.iter().filter(|e| filter.matches(e)).collect();
        matching.sort_by(|a, b| {
            a.sku
                .cmp(&b.sku)
                .then(a.supplier_id.cmp(&b.supplier_id))
                .then(a.window.from().cmp(&b.window.from()))
                .then(a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(filter.offset()).unwrap_or(usize::MAX))
            .take(filter.page_size as usize)
            .cloned()
            .collect();

        Ok(Page {
            page: filter.page,
            page_size: filter.page_size,
            total,
            items,
        })
    }
}

#[derive(Default)]
struct Catalog {
    products: Vec<Product>,
    next_id: i32,
}

impl Catalog {
    fn sku_taken(&self, sku: &str, except_id: Option<i32>) -> bool {
        self.products
            .iter()
            .any(|p| p.sku == sku && Some(p.id) != except_id)
    }
}

/// Process-local product catalog with the same unique-SKU rule as the `products` table.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: RwLock<Catalog>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.state.read().await.products.clone();
        products.sort_by(|a, b| a.sku.cmp(&b.sku));
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        if state.sku_taken(&product.sku, None) {
            return Err(RepositoryError::Conflict);
        }
        state.next_id += 1;
        let created = Product::from_new(state.next_id, product.clone());
        state.products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.sku_taken(&product.sku, Some(product.id)) {
            return Err(RepositoryError::Conflict);
        }
        let stored = state
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = product.clone();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
