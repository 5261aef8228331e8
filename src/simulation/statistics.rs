//! Dataset statistics and reporting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::substitution::SubstitutionReport;
use crate::table::ExperimentTable;
use crate::types::Group;

/// Summary of a generated dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    // Structure
    /// Number of distinct subjects in the table
    pub subject_count: usize,
    /// Number of records in the table
    pub record_count: usize,
    /// Subjects assigned to treatment-1
    pub treatment_1_subjects: usize,
    /// Subjects assigned to treatment-2
    pub treatment_2_subjects: usize,
    /// Subjects assigned to control
    pub control_subjects: usize,

    // Values
    /// Records with Correct = 1
    pub correct_records: usize,
    /// Mean subject age
    pub mean_age: f64,
    /// Mean reaction time over all records
    pub mean_rt: f64,
    /// Smallest reaction time
    pub min_rt: f64,
    /// Largest reaction time
    pub max_rt: f64,

    // Substitution
    /// Reaction times replaced from the reference sample
    pub substituted_rts: usize,
    /// Reaction times clamped to the timeout
    pub clamped_rts: usize,

    /// Wall-clock time spent generating the table
    pub generation_duration: Duration,
}

impl DatasetStatistics {
    /// Compute statistics over a finished table
    pub fn from_table(table: &ExperimentTable, report: SubstitutionReport) -> Self {
        let mut stats = Self {
            record_count: table.len(),
            substituted_rts: report.substituted,
            clamped_rts: report.clamped,
            ..Default::default()
        };

        if table.is_empty() {
            return stats;
        }

        let mut age_sum = 0.0;
        let mut rt_sum = 0.0;
        let mut min_rt = f64::INFINITY;
        let mut max_rt = f64::NEG_INFINITY;
        let mut current_subject = None;

        for record in table {
            // Subject blocks are contiguous, so a change of id starts a new subject
            if current_subject != Some(record.subject) {
                current_subject = Some(record.subject);
                stats.subject_count += 1;
                age_sum += record.age;
                match record.group {
                    Group::Treatment1 => stats.treatment_1_subjects += 1,
                    Group::Treatment2 => stats.treatment_2_subjects += 1,
                    Group::Control => stats.control_subjects += 1,
                }
            }

            stats.correct_records += usize::from(record.correct == 1);
            rt_sum += record.rt;
            min_rt = min_rt.min(record.rt);
            max_rt = max_rt.max(record.rt);
        }

        stats.mean_age = age_sum / stats.subject_count as f64;
        stats.mean_rt = rt_sum / stats.record_count as f64;
        stats.min_rt = min_rt;
        stats.max_rt = max_rt;
        stats
    }

    /// Set the generation duration
    pub fn set_generation_duration(&mut self, duration: Duration) {
        self.generation_duration = duration;
    }

    fn percentage_of_records(&self, count: usize) -> f64 {
        if self.record_count == 0 {
            0.0
        } else {
            (count as f64 / self.record_count as f64) * 100.0
        }
    }

    /// Share of records with Correct = 1, in percent
    pub fn accuracy_percentage(&self) -> f64 {
        self.percentage_of_records(self.correct_records)
    }

    /// Share of reaction times replaced from the reference sample, in percent
    pub fn substituted_percentage(&self) -> f64 {
        self.percentage_of_records(self.substituted_rts)
    }

    /// Share of reaction times clamped to the timeout, in percent
    pub fn clamped_percentage(&self) -> f64 {
        self.percentage_of_records(self.clamped_rts)
    }

    /// Number of subjects in a group
    pub fn subjects_in(&self, group: Group) -> usize {
        match group {
            Group::Treatment1 => self.treatment_1_subjects,
            Group::Treatment2 => self.treatment_2_subjects,
            Group::Control => self.control_subjects,
        }
    }

    /// Multi-line report printed at the end of a run
    pub fn summary_report(&self) -> String {
        let mut output = String::new();

        output.push_str("🎯 Dataset Generation Complete!\n");
        output.push_str("===============================\n\n");

        output.push_str("📊 Structure:\n");
        output.push_str(&format!(
            "   {} records for {} subjects\n",
            self.record_count, self.subject_count
        ));
        for group in Group::ALL {
            output.push_str(&format!("   {}: {} subjects\n", group, self.subjects_in(group)));
        }
        output.push_str(&format!("   Mean Age: {:.1}\n\n", self.mean_age));

        output.push_str("📈 Responses:\n");
        output.push_str(&format!(
            "   Accuracy: {:.1}% ({} correct)\n",
            self.accuracy_percentage(),
            self.correct_records
        ));
        output.push_str(&format!(
            "   RT: mean {:.1} ms, min {:.1} ms, max {:.1} ms\n\n",
            self.mean_rt, self.min_rt, self.max_rt
        ));

        output.push_str("🔁 Substitution:\n");
        output.push_str(&format!(
            "   Replaced from reference: {} ({:.1}%)\n",
            self.substituted_rts,
            self.substituted_percentage()
        ));
        output.push_str(&format!(
            "   Clamped to timeout: {} ({:.1}%)\n",
            self.clamped_rts,
            self.clamped_percentage()
        ));
        output.push_str(&format!(
            "   Duration: {:.2} seconds\n",
            self.generation_duration.as_secs_f64()
        ));

        output
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} subjects, accuracy {:.1}%, mean RT {:.1} ms, {} substituted, {} clamped",
            self.record_count,
            self.subject_count,
            self.accuracy_percentage(),
            self.mean_rt,
            self.substituted_rts,
            self.clamped_rts
        )
    }
}
