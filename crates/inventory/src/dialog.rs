//! At most one modal dialog is active at a time; the enum makes that structural.

use crate::model::{Product, ProductId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DialogKind {
    AddProduct,
    EditProduct,
    ConfirmDelete,
    ConfirmBatchDelete,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum DialogState {
    /// No dialog open.
    #[default]
    Closed,
    AddProduct,
    EditProduct(Product),
    ConfirmDelete(ProductId),
    ConfirmBatchDelete,
}

impl DialogState {
    pub fn open_add(&mut self) {
        *self = DialogState::AddProduct;
    }

    pub fn open_edit(&mut self, product: Product) {
        *self = DialogState::EditProduct(product);
    }

    pub fn open_delete_confirm(&mut self, id: ProductId) {
        *self = DialogState::ConfirmDelete(id);
    }

    pub fn open_batch_delete_confirm(&mut self) {
        *self = DialogState::ConfirmBatchDelete;
    }

    /// Closes the dialog only if `kind` is the one currently open.
    pub fn close(&mut self, kind: DialogKind) -> bool {
        if self.kind() == Some(kind) {
            *self = DialogState::Closed;
            true
        } else {
            false
        }
    }

    pub fn close_add(&mut self) -> bool {
        self.close(DialogKind::AddProduct)
    }

    pub fn close_edit(&mut self) -> bool {
        self.close(DialogKind::EditProduct)
    }

    pub fn close_delete_confirm(&mut self) -> bool {
        self.close(DialogKind::ConfirmDelete)
    }

    pub fn close_batch_delete_confirm(&mut self) -> bool {
        self.close(DialogKind::ConfirmBatchDelete)
    }

    pub fn close_all(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            DialogState::Closed => None,
            DialogState::AddProduct => Some(DialogKind::AddProduct),
            DialogState::EditProduct(_) => Some(DialogKind::EditProduct),
            DialogState::ConfirmDelete(_) => Some(DialogKind::ConfirmDelete),
            DialogState::ConfirmBatchDelete => Some(DialogKind::ConfirmBatchDelete),
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind().is_some()
    }

    pub fn editing_product(&self) -> Option<&Product> {
        match self {
            DialogState::EditProduct(product) => Some(product),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<&ProductId> {
        match self {
            DialogState::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }
}
