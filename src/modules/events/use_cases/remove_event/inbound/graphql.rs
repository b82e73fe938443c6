use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::errors::into_graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveEventMutation;

#[Object]
impl RemoveEventMutation {
    async fn remove_event(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .events
            .remove_event(&id)
            .await
            .map_err(into_graphql_error)?;
        tracing::info!(event_id = %id.as_str(), "event removed");
        Ok(true)
    }
}
