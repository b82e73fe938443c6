use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::errors::into_graphql_error;
use crate::modules::events::adapters::inbound::graphql_types::GqlEvent;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        start_date: String,
        end_date: String,
        title: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .create_event(CreateEvent {
                start_date,
                end_date,
                title,
            })
            .await
            .map_err(into_graphql_error)?;
        tracing::info!(event_id = %event.id, "event created");
        Ok(event.into())
    }
}
