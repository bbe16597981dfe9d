use pdf_writer::Ref;
use tracing::trace;

/// The objects a carpet document is made of
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page,
    ContentForPage,
    LabelFont,
}

/// Hands out consecutive PDF object ids
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        trace!(?ref_type, id, "allocated object");
        Ref::new(id)
    }
}
