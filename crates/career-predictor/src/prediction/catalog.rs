use super::domain::RiasecCategory;

/// Compiled-in lookup from RIASEC category to career titles and profile copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerCatalog;

impl CareerCatalog {
    pub const fn careers(self, category: RiasecCategory) -> &'static [&'static str] {
        match category {
            RiasecCategory::Realistic => &[
                "Software Engineer",
                "Network Administrator",
                "DevOps Engineer",
                "Robotics Engineer",
            ],
            RiasecCategory::Investigative => &[
                "Data Scientist",
                "Cybersecurity Analyst",
                "AI Researcher",
                "Systems Analyst",
            ],
            RiasecCategory::Artistic => &[
                "UX/UI Designer",
                "Frontend Developer",
                "Game Designer",
                "Digital Marketer",
            ],
            RiasecCategory::Social => &[
                "Product Manager",
                "Tech Lead",
                "Scrum Master",
                "Developer Advocate",
            ],
            RiasecCategory::Enterprising => &[
                "Startup Founder",
                "IT Project Manager",
                "Sales Engineer",
                "Business Analyst",
            ],
            RiasecCategory::Conventional => &[
                "QA Engineer",
                "Database Administrator",
                "Technical Writer",
                "Compliance Officer",
            ],
        }
    }

    pub const fn profile(self, category: RiasecCategory) -> &'static str {
        match category {
            RiasecCategory::Realistic => {
                "You are a 'Doer'. You enjoy practical, hands-on activities and building things."
            }
            RiasecCategory::Investigative => {
                "You are a 'Thinker'. You enjoy solving complex problems and researching how things work."
            }
            RiasecCategory::Artistic => {
                "You are a 'Creator'. You value self-expression, innovation, and aesthetic design."
            }
            RiasecCategory::Social => {
                "You are a 'Helper'. You enjoy working with people, mentoring, and collaborating."
            }
            RiasecCategory::Enterprising => {
                "You are a 'Persuader'. You are energetic, ambitious, and enjoy leading projects."
            }
            RiasecCategory::Conventional => {
                "You are an 'Organizer'. You value structure, precision, and efficiency in systems."
            }
        }
    }
}
