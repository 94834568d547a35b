//! Reminder board — upcoming and expired care reminders.
//!
//! The API returns the schedule pre-split into future and expired lists,
//! so nothing here re-derives due state locally. Edits and deletes go to
//! the backend first; the local lists only change once it confirmed.

use crate::api::{ApiError, PlatformApi};
use crate::models::{Reminder, ReminderSchedule};
use crate::session::AuthSession;

#[derive(Debug, Default)]
pub struct ReminderBoard {
    schedule: ReminderSchedule,
    error: Option<String>,
}

impl ReminderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upcoming(&self) -> &[Reminder] {
        &self.schedule.future
    }

    pub fn expired(&self) -> &[Reminder] {
        &self.schedule.expired
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reload the schedule. Signed out clears the board without a
    /// network call; a failed fetch empties it and keeps the message.
    pub async fn refresh<A: PlatformApi>(&mut self, api: &A, session: &AuthSession) {
        let Some(token) = session.token() else {
            self.schedule = ReminderSchedule::default();
            self.error = None;
            return;
        };

        match api.fetch_reminders(token).await {
            Ok(schedule) => {
                self.schedule = schedule;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reminder fetch failed");
                self.schedule = ReminderSchedule::default();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Delete a reminder on the backend, then drop it locally.
    pub async fn delete<A: PlatformApi>(
        &mut self,
        api: &A,
        session: &AuthSession,
        reminder_id: &str,
    ) -> Result<(), ApiError> {
        let token = session.token().ok_or(ApiError::NotAuthenticated)?;
        api.delete_reminder(token, reminder_id).await?;

        self.schedule.future.retain(|r| r.id != reminder_id);
        self.schedule.expired.retain(|r| r.id != reminder_id);
        Ok(())
    }

    /// Save an edited reminder on the backend, then replace it in
    /// whichever list holds it.
    pub async fn update<A: PlatformApi>(
        &mut self,
        api: &A,
        session: &AuthSession,
        reminder: Reminder,
    ) -> Result<(), ApiError> {
        let token = session.token().ok_or(ApiError::NotAuthenticated)?;
        api.update_reminder(token, &reminder).await?;

        if let Some(slot) = self
            .schedule
            .future
            .iter_mut()
            .chain(self.schedule.expired.iter_mut())
            .find(|r| r.id == reminder.id)
        {
            *slot = reminder;
        }
        Ok(())
    }
}
