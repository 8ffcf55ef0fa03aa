//! Page-level coordinator: runs each user action against the backend and
//! applies the confirmed result to the local list and chart.

use common::InstitutionId;

use crate::api::InstitutionsApi;
use crate::chart::ChartState;
use crate::error::{ClientError, Result};
use crate::form::InstitutionForm;
use crate::list::{InstitutionList, ListEvent};
use crate::model::Institution;

/// Local view of the registry backed by an [`InstitutionsApi`].
///
/// Local state only changes after the server confirms a mutation; a failed
/// request leaves both the list and the chart as they were.
pub struct Dashboard<A: InstitutionsApi> {
    api: A,
    list: InstitutionList,
    chart: ChartState,
}

impl<A: InstitutionsApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: InstitutionList::new(),
            chart: ChartState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn list(&self) -> &InstitutionList {
        &self.list
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    /// Initial load: fetches the list and the chart.
    ///
    /// The chart is loaded even if the list fetch fails.
    #[tracing::instrument(skip(self))]
    pub async fn mount(&mut self) -> Result<()> {
        let fetched = self.api.list().await;
        self.refresh_chart().await;

        let items = fetched?;
        tracing::debug!(count = items.len(), "institutions loaded");
        self.list.apply(ListEvent::Loaded(items));
        Ok(())
    }

    /// Validates the form, checks for a duplicate, then creates the record.
    #[tracing::instrument(skip(self, form))]
    pub async fn create(&mut self, form: &InstitutionForm) -> Result<Institution> {
        let payload = form.validate()?;

        if self.api.exists(&payload.nome, &payload.uf).await? {
            return Err(ClientError::Duplicate);
        }

        let created = self.api.create(&payload).await?;
        self.list.apply(ListEvent::Added(created.clone()));
        self.refresh_chart().await;
        Ok(created)
    }

    /// Validates the form and replaces the row's fields.
    #[tracing::instrument(skip(self, form))]
    pub async fn update(
        &mut self,
        id: InstitutionId,
        form: &InstitutionForm,
    ) -> Result<Institution> {
        let payload = form.validate()?;

        let updated = self.api.update(id, &payload).await?;
        self.list.apply(ListEvent::Updated(updated.clone()));
        self.refresh_chart().await;
        Ok(updated)
    }

    /// Deletes the row, returning the server's confirmation message.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&mut self, id: InstitutionId) -> Result<String> {
        let message = self.api.delete(id).await?;
        self.list.apply(ListEvent::Removed(id));
        self.refresh_chart().await;
        Ok(message)
    }

    /// Re-fetches the per-state totals. Returns whether the fetch succeeded.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_chart(&mut self) -> bool {
        match self.api.totals_by_state().await {
            Ok(totals) => {
                self.chart.load(totals);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load chart data");
                self.chart.mark_failed();
                false
            }
        }
    }

    /// True if the backend answers its liveness probe.
    pub async fn backend_status(&self) -> bool {
        self.api.health().await.is_ok()
    }
}
