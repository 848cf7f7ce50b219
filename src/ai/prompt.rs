use super::GradingCriteria;
use entity::exercises::Kind;
use std::fmt::Write;

pub(super) const SYSTEM: &str = "You are an impartial hackathon judge. \
    Evaluate the submission against the exercise and respond with a single JSON object.";

fn checklist(kind: Kind) -> &'static str {
    match kind {
        Kind::Coding => {
            "- correctness and completeness of the solution\n\
             - code quality and readability\n\
             - architecture and design decisions\n\
             - error handling and edge cases\n\
             - tests and documentation"
        }
        Kind::Study => {
            "- accuracy of the findings\n\
             - depth and breadth of the research\n\
             - quality of cited sources\n\
             - clarity of the writing\n\
             - soundness of the conclusions"
        }
        Kind::Presentation => {
            "- structure and narrative flow\n\
             - clarity of the core message\n\
             - visual design of the material\n\
             - suitability for the target audience\n\
             - persuasiveness of the argument"
        }
        Kind::Deployment => {
            "- reproducibility of the setup\n\
             - quality of the infrastructure definitions\n\
             - security of the configuration\n\
             - monitoring and rollback story\n\
             - operational documentation"
        }
        Kind::Other => {
            "- relevance to the exercise\n\
             - completeness of the work\n\
             - quality of execution\n\
             - originality of the approach\n\
             - clarity of the result"
        }
    }
}

pub(super) fn build(
    content: &str,
    extension: Option<&str>,
    criteria: &GradingCriteria<'_>,
) -> String {
    let mut prompt = String::with_capacity(1024);

    let _ = writeln!(prompt, "Exercise: {}", criteria.title);

    if let Some(description) = criteria.description {
        let _ = writeln!(prompt, "Description: {description}");
    }

    let _ = writeln!(prompt, "Maximum score: {}", criteria.max_score);

    if let Some(rubric) = criteria.rubric {
        let _ = writeln!(prompt, "Rubric:\n{rubric}");
    }

    let _ = writeln!(prompt, "\nEvaluation checklist:\n{}", checklist(criteria.kind));

    match extension {
        Some(extension) => {
            let _ = writeln!(prompt, "\nSubmission (.{extension} file):\n{content}");
        }
        None => {
            let _ = writeln!(prompt, "\nSubmission:\n{content}");
        }
    }

    let _ = write!(
        prompt,
        "\nRespond with a JSON object with the keys \"score\" (number, 0 to {}), \
         \"feedback\" (string), \"strengths\" (array of strings), \
         \"improvements\" (array of strings), \"detailed_analysis\" (string) and \
         \"confidence\" (number, 0 to 1).",
        criteria.max_score
    );

    prompt
}
