// src/resume/fields.rs
//! Keyword heuristics that pull profile fields out of raw résumé text.
//!
//! These are best-effort line scanners, not parsers. Short keywords match
//! inside longer words (`BE` matches "member", `work` matches "framework"),
//! and a document without blank lines makes the skills section run to the end.

use super::ResumeProfile;

pub const EDUCATION_NOT_FOUND: &str = "Education details not found.";
pub const EXPERIENCE_NOT_FOUND: &str = "Experience details not found.";
pub const SKILLS_NOT_FOUND: &str = "Skills not found.";

const EDUCATION_KEYWORDS: &[&str] = &[
    "education", "degree", "bachelor", "master", "MSc", "BE", "MBA",
];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "intern", "work", "professional", "project"];
const SKILL_KEYWORDS: &[&str] = &["skills", "technologies", "tools", "programming", "languages"];

const MAX_EXPERIENCE_LINES: usize = 5;

pub fn extract_profile(resume_text: &str) -> ResumeProfile {
    let lines = split_lines(resume_text);
    ResumeProfile {
        name: extract_name(&lines),
        education: extract_education(&lines),
        experience: extract_experience(&lines),
        skills: extract_skills(&lines),
    }
}

pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let line = line.to_lowercase();
    keywords
        .iter()
        .any(|keyword| line.contains(&keyword.to_lowercase()))
}

/// First non-empty line. Returned as-is even when it is a header or a date.
pub fn extract_name(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

pub fn extract_education(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|line| contains_any(line, EDUCATION_KEYWORDS))
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| EDUCATION_NOT_FOUND.to_string())
}

pub fn extract_experience(lines: &[&str]) -> String {
    let experiences: Vec<&str> = lines
        .iter()
        .filter(|line| contains_any(line, EXPERIENCE_KEYWORDS))
        .map(|line| line.trim())
        .take(MAX_EXPERIENCE_LINES)
        .collect();

    if experiences.is_empty() {
        EXPERIENCE_NOT_FOUND.to_string()
    } else {
        experiences.join("\n")
    }
}

/// Everything from the first skills-keyword line up to the next blank line.
pub fn extract_skills(lines: &[&str]) -> String {
    let skills: Vec<&str> = lines
        .iter()
        .skip_while(|line| !contains_any(line, SKILL_KEYWORDS))
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty())
        .collect();

    if skills.is_empty() {
        SKILLS_NOT_FOUND.to_string()
    } else {
        skills.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\n  Jane Doe  \njane@example.com\nEducation: BSc Computer Science\nMaster of Engineering\n\nSkills\nRust, Go\nDocker\n\nReferences on request";

    #[test]
    fn test_name_is_first_non_empty_line() {
        assert_eq!(extract_name(&split_lines(RESUME)), "Jane Doe");
        assert_eq!(extract_name(&split_lines("January 2024\nJane")), "January 2024");
        assert_eq!(extract_name(&split_lines("\n \n")), "");
    }

    #[test]
    fn test_education_first_match() {
        assert_eq!(
            extract_education(&split_lines(RESUME)),
            "Education: BSc Computer Science"
        );
    }

    #[test]
    fn test_education_not_found() {
        let lines = split_lines("Jane Doe\nRust developer\nSkills: Go");
        assert_eq!(extract_education(&lines), EDUCATION_NOT_FOUND);
    }

    #[test]
    fn test_education_short_keyword_matches_inside_words() {
        let lines = split_lines("Jane Doe\nTeam member at Acme");
        assert_eq!(extract_education(&lines), "Team member at Acme");
    }

    #[test]
    fn test_experience_lines_in_order() {
        let text = "Jane Doe\nline 2\nline 3\nline 4\nline 5\nline 6\n\
                    Experience: 3 years\nIntern at Acme\nWork at Globex\n\
                    Professional summary\nProject lead at Initech\nline 12";
        assert_eq!(
            extract_experience(&split_lines(text)),
            "Experience: 3 years\nIntern at Acme\nWork at Globex\nProfessional summary\nProject lead at Initech"
        );
    }

    #[test]
    fn test_experience_capped_at_five() {
        let text = (1..=8)
            .map(|i| format!("Project {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let experience = extract_experience(&split_lines(&text));
        assert_eq!(experience.lines().count(), 5);
        assert!(experience.ends_with("Project 5"));
    }

    #[test]
    fn test_experience_not_found() {
        assert_eq!(
            extract_experience(&split_lines("Jane Doe\nBSc")),
            EXPERIENCE_NOT_FOUND
        );
    }

    #[test]
    fn test_skills_until_blank_line() {
        assert_eq!(extract_skills(&split_lines(RESUME)), "Skills, Rust, Go, Docker");
    }

    #[test]
    fn test_skills_runs_to_end_without_blank_line() {
        let lines = split_lines("Jane Doe\nSkills: Python, Go");
        assert_eq!(extract_skills(&lines), "Skills: Python, Go");
    }

    #[test]
    fn test_skills_not_found() {
        assert_eq!(extract_skills(&split_lines("Jane Doe\nBSc")), SKILLS_NOT_FOUND);
    }

    #[test]
    fn test_extract_profile() {
        let profile = extract_profile("Jane Doe\nSkills: Python, Go");
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.education, EDUCATION_NOT_FOUND);
        assert_eq!(profile.experience, EXPERIENCE_NOT_FOUND);
        assert_eq!(profile.skills, "Skills: Python, Go");
    }
}
