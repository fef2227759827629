use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The tier catalog as an authorization resource. There is exactly one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    id: Uuid,
}

impl Catalog {
    pub fn default() -> Self {
        Self { id: Uuid::nil() }
    }
}

impl PolarClass for Catalog {
    fn get_polar_class_builder() -> oso::ClassBuilder<Catalog> {
        oso::Class::builder()
            .name("Catalog")
            .add_attribute_getter("id", |recv: &Catalog| recv.id.clone())
            .add_class_method("default", Catalog::default)
    }

    fn get_polar_class() -> oso::Class {
        let builder = Catalog::get_polar_class_builder();
        builder.build()
    }
}
