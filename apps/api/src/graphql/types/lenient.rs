//! Non-null output that may still come back empty
//!
//! The schema declares `Book.author`, `Author.id` and `Author.name` as
//! non-null, yet a dangling `authorId` leaves them without a value. A bare
//! `null` in those positions is the observable result; it is not raised as a
//! field error. Lookup failures are reported against the field itself and
//! resolve to `null` too, so the response shape never depends on how the
//! engine would otherwise propagate a failed non-null field.

use std::borrow::Cow;

use async_graphql::parser::types::Field;
use async_graphql::{
    registry, ContextSelectionSet, Error, OutputType, Positioned, ServerResult, Value,
};

/// Output declared as `T!` whose value may be missing or failed
#[derive(Debug, Clone)]
pub struct Lenient<T>(Result<Option<T>, Error>);

impl<T> Lenient<T> {
    pub fn value(value: T) -> Self {
        Self(Ok(Some(value)))
    }

    pub fn null() -> Self {
        Self(Ok(None))
    }

    pub fn failed(error: impl Into<Error>) -> Self {
        Self(Err(error.into()))
    }
}

impl<T> From<Option<T>> for Lenient<T> {
    fn from(value: Option<T>) -> Self {
        Self(Ok(value))
    }
}

impl<T: OutputType> OutputType for Lenient<T> {
    fn type_name() -> Cow<'static, str> {
        T::type_name()
    }

    fn create_type_info(registry: &mut registry::Registry) -> String {
        T::create_type_info(registry);
        Self::qualified_type_name()
    }

    async fn resolve(
        &self,
        ctx: &ContextSelectionSet<'_>,
        field: &Positioned<Field>,
    ) -> ServerResult<Value> {
        match &self.0 {
            Ok(Some(value)) => value.resolve(ctx, field).await,
            Ok(None) => Ok(Value::Null),
            Err(err) => {
                ctx.add_error(ctx.set_error_path(err.clone().into_server_error(field.pos)));
                Ok(Value::Null)
            }
        }
    }
}
