//! Profile Feature Pipeline
//!
//! This example walks through the full workflow:
//! - Loading profiles from CSV (with per-row rejects)
//! - Fitting the pipeline and reading the fit report
//! - Saving and reloading the fitted pipeline
//! - Transforming new profiles for inference
//! - Ranking job roles with a plugged-in classifier
//!
//! Run with: cargo run --example train_profiles [path/to/profiles.csv]
//! Set RUST_LOG=profile_features=debug for per-transform logging.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use profile_features::{
    classifier::{ProbabilisticClassifier, DEFAULT_TOP_K},
    dataset::{ProfileDataset, ProfileRecord},
    preprocessing::{PipelineConfig, PreprocessingError, ProfilePipeline},
};
use std::error::Error;

const SAMPLE_CSV: &str = "\
Degree,Major,Specialization,CGPA,Skills,Certification,Years of Experience,Preferred Industry,Job Role
B.Sc,Statistics,,3.4,\"SQL, Tableau, Excel, Power BI\",Tableau Desktop Specialist,2,Technology,Data Analyst
B.Com,Finance,Accounting,78,\"Excel, Financial Modeling, Budgeting\",CFA Level 1,3,Finance,Financial Analyst
B.Tech,Computer Science,AI,8.7,\"Python, Machine Learning, TensorFlow, SQL\",AWS Certified Machine Learning,2,Technology,Data Scientist
B.Tech,Information Technology,,8.1,\"Java, Spring, Docker, SQL\",,3,Technology,Software Engineer
BBA,Marketing,Digital,7.9,\"SEO, Content Marketing, Google Analytics\",Google Analytics Certification,1,Marketing,Digital Marketing Specialist
B.Des,Design,,8.4,\"Figma, Prototyping, User Research\",,2,Design,UI/UX Designer
B.Sc,Mathematics,,8.0,\"SQL, Excel, Statistics, Reporting\",,1,Finance,Data Analyst
B.Tech,Computer Science,,not available,\"Python, Pandas, Machine Learning\",Google Data Analytics,2,Technology,Data Scientist
B.Tech,Computer Science,Cloud,8.3,\"AWS, Docker, Kubernetes, Linux\",AWS Solutions Architect,3,Technology,Software Engineer
";

/// Nearest-centroid classifier over the feature space, with a softmax over
/// negative distances. Stands in for a real trained model.
struct CentroidClassifier {
    centroids: Array2<f64>,
}

impl CentroidClassifier {
    fn fit(features: &Array2<f64>, labels: &Array1<usize>, n_classes: usize) -> Self {
        let mut centroids = Array2::zeros((n_classes, features.ncols()));
        let mut counts = vec![0.0; n_classes];
        for (row, &label) in features.rows().into_iter().zip(labels.iter()) {
            let mut centroid = centroids.row_mut(label);
            centroid += &row;
            counts[label] += 1.0;
        }
        for (mut centroid, &count) in centroids.rows_mut().into_iter().zip(&counts) {
            if count > 0.0 {
                centroid /= count;
            }
        }
        Self { centroids }
    }
}

impl ProbabilisticClassifier for CentroidClassifier {
    fn predict_probabilities(
        &self,
        features: ArrayView2<f64>,
    ) -> Result<Array2<f64>, PreprocessingError> {
        let mut probs = Array2::zeros((features.nrows(), self.centroids.nrows()));
        for (row, mut out) in features.rows().into_iter().zip(probs.rows_mut()) {
            for (slot, centroid) in out.iter_mut().zip(self.centroids.axis_iter(Axis(0))) {
                let dist: f64 = row
                    .iter()
                    .zip(centroid.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum();
                *slot = (-dist.sqrt()).exp();
            }
            let total = out.sum();
            out /= total;
        }
        Ok(probs)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("profile_features=info")),
        )
        .init();

    println!("=== Profile Feature Pipeline ===\n");

    // Load data
    let dataset = match std::env::args().nth(1) {
        Some(path) => ProfileDataset::from_csv_path(path)?,
        None => ProfileDataset::from_reader(SAMPLE_CSV.as_bytes())?,
    };
    println!("Loaded {} profiles", dataset.len());
    for reject in dataset.rejected() {
        println!("  skipped row {}: {}", reject.row, reject.message);
    }
    let options = dataset.options();
    println!("Degrees: {:?}", options.degrees);
    let records = dataset.into_records();

    // Fit
    let mut pipeline = ProfilePipeline::new(PipelineConfig::default());
    let report = pipeline.fit(&records)?;
    println!("\nFit report:");
    println!("  rows fitted:      {} of {}", report.fitted_rows, report.input_rows);
    println!("  outliers removed: {}", report.outliers.removed);
    println!("  features:         {}", report.n_features);
    println!("  skills vocab:     {}", report.skills_vocabulary);
    println!("  cert vocab:       {}", report.certification_vocabulary);
    println!("  classes:          {:?}", report.n_classes);

    let (features, labels) = pipeline.transform_training(&records)?;
    println!("\nTraining matrix: {} x {}", features.nrows(), features.ncols());

    // Save and reload
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile_pipeline.bin");
    pipeline.save_to_file(&path)?;
    let loaded = ProfilePipeline::load_from_file(&path)?;
    let reloaded = loaded.transform_inference(&records)?;
    println!(
        "Reloaded pipeline output identical: {}",
        reloaded == pipeline.transform_inference(&records)?
    );

    // Inference
    let fitted = loaded.fitted()?;
    let n_classes = fitted
        .label_encoder()
        .map(|labels| labels.n_classes())
        .unwrap_or(0);
    let classifier = CentroidClassifier::fit(&features, &labels, n_classes);

    let candidate = ProfileRecord::new()
        .with_degree("B.Sc")
        .with_major("Statistics")
        .with_cgpa(3.6)
        .with_skills("SQL, Tableau, Excel")
        .with_years_of_experience(1)
        .with_preferred_industry("Technology");

    println!("\nCandidate features:");
    let vector = fitted.transform_one(&candidate)?;
    for (name, value) in fitted.feature_names().iter().zip(vector.iter()) {
        if *value != 0.0 {
            println!("  {:<28} {:.4}", name, value);
        }
    }

    println!("\nTop roles:");
    for role in fitted.predict_roles(&classifier, &candidate, DEFAULT_TOP_K)? {
        println!("  {:<30} {:>5.1}%", role.role, role.confidence);
    }

    Ok(())
}
