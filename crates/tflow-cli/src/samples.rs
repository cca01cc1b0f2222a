//! Sample video data for trying the pipeline.

use chrono::NaiveDate;
use tflow_models::VideoRecord;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// Sample viral videos spanning a few niches.
pub fn sample_videos() -> Vec<VideoRecord> {
    vec![
        VideoRecord::new("5 Morning Habits That Changed My Life", 1_500_000, date(2023, 5, 15))
            .with_description("I tried these 5 morning habits for 30 days and here's what happened...")
            .with_channel("ProductivityGuru")
            .with_niche("Productivity", Some("Morning routines".to_string())),
        VideoRecord::new("You've Been Charging Your Phone Wrong", 2_300_000, date(2023, 6, 2))
            .with_description("This simple trick will make your battery last twice as long!")
            .with_channel("TechHacks")
            .with_niche("Technology", Some("Smartphone tips".to_string())),
        VideoRecord::new("What I Eat in a Day as a Nutritionist", 950_000, date(2023, 5, 28))
            .with_description("Healthy meal ideas that take less than 10 minutes to prepare")
            .with_channel("HealthyEating")
            .with_niche("Health", None),
        VideoRecord::new("3 Exercises You're Doing Wrong", 1_800_000, date(2023, 6, 10))
            .with_description("Fix these common mistakes to prevent injury and get better results")
            .with_channel("FitnessExpert"),
        VideoRecord::new("I Tried This Viral Productivity Hack For a Week", 3_200_000, date(2023, 5, 20))
            .with_description("The results were shocking...")
            .with_channel("LifeHacker")
            .with_niche("Productivity", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_videos_are_valid_pipeline_input() {
        let videos = sample_videos();
        assert!(videos.len() >= 3);

        let request = tflow_models::PipelineRequest::new(videos);
        request.validate().unwrap();
    }
}
