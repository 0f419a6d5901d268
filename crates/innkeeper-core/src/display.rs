//! Display implementations for domain models and report wrappers.
//!
//! Markdown-formatted output for terminal rendering: domain models carry a
//! direct `Display`, and newtype wrappers provide context-specific framing
//! (validation reports, submission confirmations) so the same data can be
//! presented differently per screen.

use std::fmt;

use crate::models::{ImageRef, ListingRecord, RoomRecord};
use crate::submit::Submission;
use crate::validate::StepFailure;

impl fmt::Display for ListingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => writeln!(f, "# {} ({})", self.name, id)?,
            None => writeln!(f, "# {} (not yet created)", self.name)?,
        }
        writeln!(f)?;

        if let Some(category) = &self.category {
            writeln!(f, "- Category: {category}")?;
        }
        writeln!(f, "- Email: {}", self.email)?;
        if let Some(phone) = &self.phone {
            writeln!(f, "- Phone: {phone}")?;
        }
        writeln!(
            f,
            "- Address: {}, {}, {}, {}",
            self.address.street, self.address.city, self.address.province, self.address.country
        )?;
        match self.geo {
            Some(geo) => writeln!(f, "- Coordinates: {}, {}", geo.latitude, geo.longitude)?,
            None => writeln!(f, "- Coordinates: not pinned")?,
        }
        writeln!(f, "- Check-in/out: {} / {}", self.check_in, self.check_out)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.amenities.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Amenities")?;
            writeln!(f)?;
            for amenity in &self.amenities {
                writeln!(f, "- {amenity}")?;
            }
        }

        if !self.rooms.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Rooms")?;
            writeln!(f)?;
            for room in &self.rooms {
                write!(f, "{room}")?;
            }
        }

        if !self.images.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Photos")?;
            writeln!(f)?;
            for image in &self.images {
                match image {
                    ImageRef::Resolved { url } => writeln!(f, "- {url}")?,
                    ImageRef::Pending(a) => {
                        writeln!(f, "- {} ({} bytes, pending upload)", a.name, a.size)?
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for RoomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.category)?;
        writeln!(f)?;
        writeln!(f, "- Price per night: {}", self.price)?;
        writeln!(
            f,
            "- Occupancy: {} base / {} max",
            self.base_occupancy, self.max_occupancy
        )?;
        writeln!(
            f,
            "- Units: {} available of {}",
            self.available_units, self.total_units
        )?;
        if !self.amenities.is_empty() {
            writeln!(f, "- Amenities: {}", self.amenities.join(", "))?;
        }
        writeln!(f)?;
        Ok(())
    }
}

/// Wrapper formatting whole-form validation output.
pub struct ValidationReport(pub Vec<StepFailure>);

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "All steps valid.");
        }
        writeln!(f, "# Validation failures")?;
        writeln!(f)?;
        for failure in &self.0 {
            writeln!(f, "- **{}**: {}", failure.step.as_str(), failure.reason)?;
        }
        Ok(())
    }
}

/// Wrapper formatting a successful submission.
pub struct SubmissionResult(pub Submission);

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Submitted listing with ID: {}", self.0.id)?;
        if self.0.rooms_created > 0 {
            writeln!(f, "Created {} room type(s).", self.0.rooms_created)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WizardStep;

    #[test]
    fn test_validation_report_lists_each_failure() {
        let report = ValidationReport(vec![StepFailure {
            step: WizardStep::Rooms,
            reason: "add at least one room type".to_string(),
        }]);
        let text = report.to_string();
        assert!(text.contains("rooms"));
        assert!(text.contains("room type"));
    }

    #[test]
    fn test_empty_report_is_positive() {
        assert!(ValidationReport(vec![]).to_string().contains("All steps valid"));
    }

    #[test]
    fn test_listing_display_mentions_unpinned_coordinates() {
        let record = ListingRecord {
            name: "Telaga Inn".to_string(),
            ..ListingRecord::default()
        };
        let text = record.to_string();
        assert!(text.contains("Telaga Inn"));
        assert!(text.contains("not pinned"));
    }
}
