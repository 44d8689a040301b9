// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Catalog operations: category tree and products.

use uuid::Uuid;

use crate::models::{
    Category, CategoryNode, CreateCategoryRequest, NewProduct, Product, UpdateCategoryRequest,
};

use super::{Store, StoreError, StoreResult};

/// Depth of nested children returned by tree queries.
const TREE_DEPTH: usize = 2;

impl Store {
    /// Create a category; the parent must exist when given.
    pub fn create_category(&mut self, request: CreateCategoryRequest) -> StoreResult<Category> {
        if let Some(parent_id) = request.parent_id {
            if !self.categories.contains_key(&parent_id) {
                return Err(StoreError::Invalid(format!(
                    "parent category {parent_id} does not exist"
                )));
            }
        }

        let category = Category {
            id: Uuid::new_v4(),
            name: request.name,
            parent_id: request.parent_id,
        };
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    /// Update a category's name and/or parent linkage.
    pub fn update_category(
        &mut self,
        id: Uuid,
        update: UpdateCategoryRequest,
    ) -> StoreResult<Category> {
        if !self.categories.contains_key(&id) {
            return Err(StoreError::NotFound { resource: "category" });
        }

        if let Some(parent_id) = update.parent_id {
            if parent_id == id {
                return Err(StoreError::Invalid(
                    "a category cannot be its own parent".to_string(),
                ));
            }
            if !self.categories.contains_key(&parent_id) {
                return Err(StoreError::Invalid(format!(
                    "parent category {parent_id} does not exist"
                )));
            }
            // Walk the proposed parent's ancestor chain; re-parenting
            // under a descendant would cut both rows out of the tree.
            let mut ancestor = self.categories.get(&parent_id).and_then(|c| c.parent_id);
            while let Some(current) = ancestor {
                if current == id {
                    return Err(StoreError::Invalid(
                        "a category cannot be moved under its own descendant".to_string(),
                    ));
                }
                ancestor = self.categories.get(&current).and_then(|c| c.parent_id);
            }
        }

        let category = self
            .categories
            .get_mut(&id)
            .expect("existence checked above");
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(parent_id) = update.parent_id {
            category.parent_id = Some(parent_id);
        }

        Ok(category.clone())
    }

    /// Flat category list, name ascending.
    pub fn list_categories_flat(&self) -> Vec<Category> {
        let mut categories: Vec<_> = self.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }

    /// Top-level categories (`parent_id = null`) with nested children up
    /// to two levels, name ascending at every level.
    pub fn category_tree(&self) -> Vec<CategoryNode> {
        let mut roots: Vec<_> = self
            .categories
            .values()
            .filter(|c| c.parent_id.is_none())
            .collect();
        roots.sort_by(|a, b| a.name.cmp(&b.name));

        roots
            .into_iter()
            .map(|root| self.build_node(root, TREE_DEPTH))
            .collect()
    }

    /// One category with its nested children.
    pub fn get_category(&self, id: Uuid) -> StoreResult<CategoryNode> {
        let category = self
            .categories
            .get(&id)
            .ok_or(StoreError::NotFound { resource: "category" })?;
        Ok(self.build_node(category, TREE_DEPTH))
    }

    fn build_node(&self, category: &Category, depth: usize) -> CategoryNode {
        let children = if depth == 0 {
            Vec::new()
        } else {
            let mut children: Vec<_> = self
                .categories
                .values()
                .filter(|c| c.parent_id == Some(category.id))
                .collect();
            children.sort_by(|a, b| a.name.cmp(&b.name));
            children
                .into_iter()
                .map(|child| self.build_node(child, depth - 1))
                .collect()
        };

        CategoryNode {
            id: category.id,
            name: category.name.clone(),
            parent_id: category.parent_id,
            children,
        }
    }

    /// Create a product; vendor and category must exist.
    pub fn create_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        if !self.vendors.contains_key(&new.vendor_id) {
            return Err(StoreError::Invalid(format!(
                "vendor {} does not exist",
                new.vendor_id
            )));
        }
        if !self.categories.contains_key(&new.category_id) {
            return Err(StoreError::Invalid(format!(
                "category {} does not exist",
                new.category_id
            )));
        }

        let product = Product {
            id: Uuid::new_v4(),
            vendor_id: new.vendor_id,
            category_id: new.category_id,
            name: new.name,
            description: new.description,
            price_cents: new.price_cents,
            is_active: new.is_active,
        };
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// Active products, optionally filtered, name ascending.
    pub fn list_products(
        &self,
        category_id: Option<Uuid>,
        vendor_id: Option<Uuid>,
    ) -> Vec<Product> {
        let mut products: Vec<_> = self
            .products
            .values()
            .filter(|p| p.is_active)
            .filter(|p| category_id.is_none_or(|c| p.category_id == c))
            .filter(|p| vendor_id.is_none_or(|v| p.vendor_id == v))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    /// One active product; inactive products are not found on public paths.
    pub fn get_active_product(&self, id: Uuid) -> StoreResult<Product> {
        self.products
            .get(&id)
            .filter(|p| p.is_active)
            .cloned()
            .ok_or(StoreError::NotFound { resource: "product" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateVendorRequest, RegisterProfileRequest};

    fn seeded_vendor(store: &mut Store) -> Uuid {
        let (owner, _) = store.upsert_user_profile(
            "vendor_sub",
            RegisterProfileRequest {
                email: "v@example.com".into(),
                first_name: "V".into(),
                last_name: "Endor".into(),
            },
        );
        store
            .create_vendor(
                owner.id,
                CreateVendorRequest {
                    company_name: "Acme Dental".into(),
                    identification_number: "ID-1".into(),
                    contact_email: "acme@example.com".into(),
                    contact_phone: "555".into(),
                },
            )
            .id
    }

    fn category(store: &mut Store, name: &str, parent: Option<Uuid>) -> Category {
        store
            .create_category(CreateCategoryRequest {
                name: name.into(),
                parent_id: parent,
            })
            .unwrap()
    }

    #[test]
    fn tree_returns_top_level_only_with_two_child_levels() {
        let mut store = Store::new();
        let equipment = category(&mut store, "Equipment", None);
        let chairs = category(&mut store, "Chairs", Some(equipment.id));
        let hydraulic = category(&mut store, "Hydraulic", Some(chairs.id));
        // Third level below a root must be cut off.
        let _pistons = category(&mut store, "Pistons", Some(hydraulic.id));
        let consumables = category(&mut store, "Consumables", None);

        let tree = store.category_tree();

        // Top-level only, name ascending.
        let names: Vec<_> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Consumables", "Equipment"]);
        assert!(tree.iter().all(|n| n.parent_id.is_none()));

        let equipment_node = &tree[1];
        assert_eq!(equipment_node.children.len(), 1);
        let chairs_node = &equipment_node.children[0];
        assert_eq!(chairs_node.name, "Chairs");
        assert_eq!(chairs_node.children.len(), 1);
        // Depth two reached: the grandchild has no further nesting.
        assert!(chairs_node.children[0].children.is_empty());

        let consumables_node = &tree[0];
        assert_eq!(consumables_node.id, consumables.id);
        assert!(consumables_node.children.is_empty());
    }

    #[test]
    fn children_are_sorted_by_name() {
        let mut store = Store::new();
        let root = category(&mut store, "Root", None);
        category(&mut store, "Zeta", Some(root.id));
        category(&mut store, "Alpha", Some(root.id));

        let tree = store.category_tree();
        let children: Vec<_> = tree[0].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(children, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn category_parent_must_exist() {
        let mut store = Store::new();
        let err = store
            .create_category(CreateCategoryRequest {
                name: "Orphan".into(),
                parent_id: Some(Uuid::new_v4()),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[test]
    fn category_cannot_become_its_own_parent() {
        let mut store = Store::new();
        let root = category(&mut store, "Root", None);
        let err = store
            .update_category(
                root.id,
                UpdateCategoryRequest {
                    parent_id: Some(root.id),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[test]
    fn re_parenting_under_a_descendant_is_invalid() {
        let mut store = Store::new();
        let a = category(&mut store, "A", None);
        let b = category(&mut store, "B", Some(a.id));
        let c = category(&mut store, "C", Some(b.id));

        // Direct child and deeper descendant both rejected.
        for target in [b.id, c.id] {
            let err = store
                .update_category(
                    a.id,
                    UpdateCategoryRequest {
                        parent_id: Some(target),
                        ..Default::default()
                    },
                )
                .unwrap_err();
            assert!(matches!(err, StoreError::Invalid(_)));
        }

        // The chain stays rooted and fully reachable.
        let tree = store.category_tree();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, a.id);
        assert_eq!(tree[0].children[0].children[0].id, c.id);
    }

    #[test]
    fn product_listing_hides_inactive_and_filters() {
        let mut store = Store::new();
        let vendor_id = seeded_vendor(&mut store);
        let cat_a = category(&mut store, "A", None);
        let cat_b = category(&mut store, "B", None);

        store
            .create_product(NewProduct {
                vendor_id,
                category_id: cat_a.id,
                name: "Scaler".into(),
                description: String::new(),
                price_cents: 1000,
                is_active: true,
            })
            .unwrap();
        store
            .create_product(NewProduct {
                vendor_id,
                category_id: cat_b.id,
                name: "Mirror".into(),
                description: String::new(),
                price_cents: 500,
                is_active: false,
            })
            .unwrap();

        let all = store.list_products(None, None);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Scaler");

        assert!(store.list_products(Some(cat_b.id), None).is_empty());
        assert_eq!(store.list_products(Some(cat_a.id), Some(vendor_id)).len(), 1);
    }

    #[test]
    fn inactive_product_is_not_found() {
        let mut store = Store::new();
        let vendor_id = seeded_vendor(&mut store);
        let cat = category(&mut store, "A", None);
        let product = store
            .create_product(NewProduct {
                vendor_id,
                category_id: cat.id,
                name: "Retired".into(),
                description: String::new(),
                price_cents: 100,
                is_active: false,
            })
            .unwrap();

        let err = store.get_active_product(product.id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "product" }));
    }
}
