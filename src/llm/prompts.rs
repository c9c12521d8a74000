// src/llm/prompts.rs
use crate::jobs::JobPosting;
use crate::resume::ResumeProfile;

pub fn job_extraction_prompt(page_data: &str) -> String {
    format!(
        r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}
### INSTRUCTION:
The scraped text is from the career's page of a website.
Your job is to extract the job postings and return them in JSON format containing the following keys: `role`, `experience`, `skills`, and `description`.
Only return the valid JSON.
### VALID JSON (NO PREAMBLE):"#
    )
}

pub fn cover_letter_prompt(job: &JobPosting, profile: &ResumeProfile) -> String {
    format!(
        r#"### JOB DESCRIPTION:
{job_description}

### INSTRUCTION:
Write a personalized cover letter for the given job role using my resume details:
- Name: {name}
- Education: {education}
- Experience: {experience}
- Skills: {skills}
The cover letter should highlight my qualifications for the job role, explaining why I am a good fit for the position. Be sure to connect my experience and skills with the job requirements.
### COVER LETTER (NO PREAMBLE):"#,
        job_description = job.to_prompt_text(),
        name = profile.name,
        education = profile.education,
        experience = profile.experience,
        skills = profile.skills,
    )
}
