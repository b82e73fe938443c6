use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::errors::into_graphql_error;
use crate::modules::events::adapters::inbound::graphql_types::GqlEventPage;
use crate::modules::events::use_cases::list_events::query::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, ListEvents,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListEventsQuery;

#[Object]
impl ListEventsQuery {
    async fn events(
        &self,
        context: &Context<'_>,
        start_date: String,
        end_date: String,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<GqlEventPage> {
        let state = context.data_unchecked::<AppState>();
        let query = ListEvents::new(start_date, end_date)
            .offset(offset.map_or(DEFAULT_OFFSET, |v| v.max(0) as u64))
            .limit(limit.map_or(DEFAULT_LIMIT, |v| v.max(0) as u64));
        let page = state
            .events
            .get_events(query)
            .await
            .map_err(into_graphql_error)?;
        Ok(page.into())
    }
}
