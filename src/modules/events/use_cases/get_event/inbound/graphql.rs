use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::errors::into_graphql_error;
use crate::modules::events::adapters::inbound::graphql_types::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetEventQuery;

#[Object]
impl GetEventQuery {
    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .get_event(&id)
            .await
            .map_err(into_graphql_error)?;
        Ok(event.into())
    }
}
