use async_trait::async_trait;
use cover_letter::resume::MIME_DOCX;
use cover_letter::{
    CoverLetterService, LanguageModel, LetterOutcome, LlmError, ModelProvider, PageFetcher,
    RawDocument, Submission, SubmissionOutcome,
};
use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

const CAREERS_URL: &str = "https://example.com/careers";
const JOB_JSON: &str =
    r#"{"role":"Engineer","experience":"2 years","skills":"Go","description":"Build services"}"#;

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{}</w:body></w:document>",
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Serves a careers page and records which URLs were requested.
#[derive(Clone, Default)]
struct CareersPage {
    requested: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl PageFetcher for CareersPage {
    async fn fetch_page_text(&self, url: &str) -> cover_letter::Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(cover_letter::clean_text(
            "<h1>Careers</h1><p>Engineer, 2 years, Go. Build services.</p>",
        ))
    }
}

/// Stands in for the hosted model: answers the extraction prompt with one
/// job and writes a letter from the résumé fields found in the prompt.
struct FakeModel;

#[async_trait]
impl LanguageModel for FakeModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if prompt.contains("### SCRAPED TEXT FROM WEBSITE:") {
            return Ok(JOB_JSON.to_string());
        }
        let field = |label: &str| {
            prompt
                .lines()
                .find_map(|line| line.strip_prefix(label))
                .unwrap_or_default()
                .to_string()
        };
        Ok(format!(
            "Dear Hiring Manager,\n\nMy name is {} and my skills ({}) fit this role.\n",
            field("- Name: "),
            field("- Skills: ")
        ))
    }
}

struct FakeProvider;

impl ModelProvider for FakeProvider {
    fn build(&self) -> Result<Box<dyn LanguageModel>, LlmError> {
        Ok(Box::new(FakeModel))
    }
}

#[tokio::test]
async fn generates_one_letter_for_single_job_page() {
    let page = CareersPage::default();
    let service = CoverLetterService::new(page.clone(), FakeProvider);

    let submission = Submission {
        resume: Some(RawDocument::new(
            docx(&["Jane Doe", "Skills: Python, Go"]),
            Some(MIME_DOCX.to_string()),
            Some("jane.docx".to_string()),
        )),
        url: Some(CAREERS_URL.to_string()),
    };

    let letters = match service.submit(submission).await {
        SubmissionOutcome::Letters { letters } => letters,
        other => panic!("unexpected outcome: {:?}", other),
    };

    assert_eq!(letters.len(), 1);
    match &letters[0] {
        LetterOutcome::Generated { job, cover_letter } => {
            assert_eq!(job.role, "Engineer");
            assert_eq!(cover_letter.role, "Engineer");
            assert!(cover_letter.text.contains("Jane Doe"));
            assert!(cover_letter.text.contains("Go"));
        }
        other => panic!("unexpected letter: {:?}", other),
    }
    assert_eq!(*page.requested.lock().unwrap(), vec![CAREERS_URL.to_string()]);
}

#[tokio::test]
async fn missing_inputs_never_reach_the_network() {
    let page = CareersPage::default();
    let service = CoverLetterService::new(page.clone(), FakeProvider);

    let outcome = service.submit(Submission::default()).await;
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["type"], "warning");
    assert_eq!(json["message"], "Please upload your resume to proceed.");

    let outcome = service
        .submit(Submission {
            resume: Some(RawDocument::new(
                docx(&["Jane Doe"]),
                Some(MIME_DOCX.to_string()),
                None,
            )),
            url: None,
        })
        .await;
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["message"], "Please enter the job posting URL.");

    assert!(page.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn letters_serialize_for_display() {
    let service = CoverLetterService::new(CareersPage::default(), FakeProvider);
    let outcome = service
        .submit(Submission {
            resume: Some(RawDocument::new(
                docx(&["Jane Doe", "Skills: Python, Go"]),
                Some(MIME_DOCX.to_string()),
                None,
            )),
            url: Some(CAREERS_URL.to_string()),
        })
        .await;

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["type"], "letters");
    assert_eq!(json["letters"][0]["status"], "generated");
    assert_eq!(json["letters"][0]["job"]["skills"], "Go");
    assert!(json["letters"][0]["cover_letter"]["generated_at"].is_string());
}
