use crate::infra::read_payload;
use career_predictor::error::AppError;
use career_predictor::prediction::{
    AnswerEntry, CareerPredictor, PredictionRequest, PredictionResult, RiasecCategory,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// JSON file holding `{"answers": [{"category": ..., "value": ...}]}`. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print the prediction on a single line instead of pretty JSON.
    #[arg(long)]
    pub(crate) compact: bool,
}

/// Reference quiz outcomes used to sanity-check the rule table.
struct DemoProfile {
    name: &'static str,
    scores: [i64; 6],
}

impl DemoProfile {
    fn answers(&self) -> Vec<AnswerEntry> {
        RiasecCategory::ordered()
            .into_iter()
            .zip(self.scores)
            .map(|(category, value)| AnswerEntry::new(category, value))
            .collect()
    }
}

static DEMO_PROFILES: [DemoProfile; 3] = [
    DemoProfile {
        name: "Software Engineer profile (high Realistic + Investigative)",
        scores: [5, 5, 2, 2, 3, 4],
    },
    DemoProfile {
        name: "UX/UI Designer profile (high Artistic + Social)",
        scores: [2, 3, 5, 5, 2, 2],
    },
    DemoProfile {
        name: "Data Scientist profile (high Investigative + Conventional)",
        scores: [3, 5, 2, 2, 3, 5],
    },
];

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs { answers, compact } = args;

    let payload = read_payload(answers.as_deref())?;
    let request = PredictionRequest::from_slice(&payload)?;
    let result = CareerPredictor::default().predict(&request.answers);

    let rendered = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let predictor = CareerPredictor::default();

    println!("Career prediction demo");
    for profile in &DEMO_PROFILES {
        let result = predictor.predict(&profile.answers());
        println!("\n{}", render_prediction(profile.name, &result));
    }

    Ok(())
}

fn render_prediction(name: &str, result: &PredictionResult) -> String {
    let [top, secondary] = result.top_traits;
    format!(
        "{name}\n  Predicted career: {}\n  Confidence: {:.0}%\n  Top traits: {top}, {secondary}\n  Recommendations: {}\n  Behavioral profile: {}",
        result.career,
        result.confidence * 100.0,
        result.recommendations.join(", "),
        result.behavioral_profile,
    )
}
