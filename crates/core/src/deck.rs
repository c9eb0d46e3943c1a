//! Slide deck content.
//!
//! The deck is a fixed table of slides and does not depend on the markdown
//! source. Renderers walk [`Deck::slides`] and draw each [`Slide`] with one
//! generic routine per layout.

use crate::types::Rgb;

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Convert hundredths of an inch to EMU.
pub const fn emu(hundredths_of_inch: i64) -> i64 {
    hundredths_of_inch * EMU_PER_INCH / 100
}

/// Free-floating text box on a blank slide. Text is centered in the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub text: &'static str,
    /// Position and size in EMU.
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
    /// Font size in points.
    pub size: u32,
    pub bold: bool,
    pub color: Rgb,
}

/// Title placeholder styling on a title-and-content slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTitle {
    pub text: &'static str,
    pub size: u32,
    pub color: Rgb,
}

/// One paragraph in the body placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLine {
    pub text: &'static str,
    /// Font size in points; `None` inherits from the layout.
    pub size: Option<u32>,
    pub bold: bool,
}

/// A slide and the layout it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Blank layout with absolutely positioned text boxes.
    Blank { boxes: &'static [TextBox] },
    /// Title and content layout.
    TitleAndContent {
        title: SlideTitle,
        body: &'static [BodyLine],
    },
}

impl Slide {
    /// Title text, or the first text box on a blank slide.
    pub fn heading(&self) -> &'static str {
        match self {
            Slide::Blank { boxes } => boxes.first().map(|b| b.text).unwrap_or(""),
            Slide::TitleAndContent { title, .. } => title.text,
        }
    }

    /// All text on the slide in reading order.
    pub fn lines(&self) -> Vec<&'static str> {
        match self {
            Slide::Blank { boxes } => boxes.iter().map(|b| b.text).collect(),
            Slide::TitleAndContent { title, body } => std::iter::once(title.text)
                .chain(body.iter().map(|l| l.text))
                .collect(),
        }
    }
}

/// An ordered list of slides with the slide size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Slide width in EMU.
    pub width: i64,
    /// Slide height in EMU.
    pub height: i64,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty 10" x 7.5" deck.
    pub fn new() -> Self {
        Self {
            width: emu(1000),
            height: emu(750),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the end of the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The RASS Academy overview deck.
    pub fn rass_academy() -> Self {
        let mut deck = Self::new();
        for slide in RASS_ACADEMY_SLIDES {
            deck.add_slide(*slide);
        }
        deck
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

const TITLE_SIZE: u32 = 40;

const fn title(text: &'static str) -> SlideTitle {
    SlideTitle {
        text,
        size: TITLE_SIZE,
        color: Rgb::DARK_BLUE,
    }
}

/// Body line that inherits the layout font size.
const fn lead(text: &'static str) -> BodyLine {
    BodyLine {
        text,
        size: None,
        bold: false,
    }
}

const fn line(text: &'static str, size: u32) -> BodyLine {
    BodyLine {
        text,
        size: Some(size),
        bold: false,
    }
}

/// Bold 20pt section header inside a body.
const fn section(text: &'static str) -> BodyLine {
    BodyLine {
        text,
        size: Some(20),
        bold: true,
    }
}

#[allow(clippy::too_many_arguments)]
const fn text_box(
    text: &'static str,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    size: u32,
    bold: bool,
    color: Rgb,
) -> TextBox {
    TextBox {
        text,
        left: emu(left),
        top: emu(top),
        width: emu(width),
        height: emu(height),
        size,
        bold,
        color,
    }
}

static RASS_ACADEMY_SLIDES: &[Slide] = &[
    Slide::Blank {
        boxes: &[
            text_box("RASS ACADEMY", 100, 250, 800, 100, 54, true, Rgb::DARK_BLUE),
            text_box(
                "Complete Learning Management System",
                100,
                350,
                800,
                50,
                32,
                false,
                Rgb::LIGHT_BLUE,
            ),
            text_box(
                "Comprehensive User Guide & Visual Workflows",
                100,
                430,
                800,
                50,
                24,
                false,
                Rgb::ACCENT,
            ),
        ],
    },
    Slide::TitleAndContent {
        title: title("📖 Table of Contents"),
        body: &[
            lead("1. Introduction to RASS Academy"),
            line("2. Getting Started", 20),
            line("3. User Roles & Dashboards", 20),
            line("4. Student Portal Features", 20),
            line("5. Instructor Portal Features", 20),
            line("6. Administrator Portal Features", 20),
            line("7. Public Features & Partnerships", 20),
            line("8. Technical Setup & Deployment", 20),
            line("9. Troubleshooting & Support", 20),
        ],
    },
    Slide::TitleAndContent {
        title: title("🎓 What is RASS Academy?"),
        body: &[
            line(
                "A comprehensive Learning Management System (LMS) designed to deliver modern, interactive online education",
                20,
            ),
            line("🎓 Comprehensive Course Management", 18),
            line("👥 Batch-based Learning", 18),
            line("📊 Advanced Analytics & Progress Tracking", 18),
            line("🎥 Video-based Learning with Interactive Features", 18),
            line("📝 Assessments & Auto-grading", 18),
            line("🏆 Gamification & Leaderboards", 18),
            line("💬 Real-time Communication Tools", 18),
            line("🤝 Partnership Programs", 18),
        ],
    },
    Slide::TitleAndContent {
        title: title("👨‍🎓 Student Features"),
        body: &[
            lead("Access to structured courses with video lectures"),
            line("Interactive quizzes with instant feedback", 18),
            line("Assignment submission and tracking", 18),
            line("Live sessions and discussions", 18),
            line("AI-powered doubt clearing", 18),
            line("Progress tracking and certificates", 18),
            line("Leaderboards and achievements", 18),
            line("Timestamped video notes", 18),
            line("Discussion forums", 18),
        ],
    },
    Slide::TitleAndContent {
        title: title("👨‍🏫 Instructor Features"),
        body: &[
            lead("Course and content management"),
            line("Batch management and analytics", 18),
            line("Student performance tracking", 18),
            line("Assignment and quiz creation", 18),
            line("Attendance management (manual + auto)", 18),
            line("Announcements and communication", 18),
            line("Advanced analytics dashboard", 18),
            line("Live session hosting", 18),
            line("Grading and feedback tools", 18),
        ],
    },
    Slide::TitleAndContent {
        title: title("⚙️ Administrator Features"),
        body: &[
            lead("Complete platform management"),
            line("User management (students, instructors)", 18),
            line("Course and batch administration", 18),
            line("Certificate generation and management", 18),
            line("Partnership program oversight", 18),
            line("Platform analytics and reporting", 18),
            line("Event management", 18),
            line("Support ticket system", 18),
            line("System configuration", 18),
        ],
    },
    Slide::TitleAndContent {
        title: title("🎯 Student Learning Workflow"),
        body: &[
            lead("1. Browse Course Catalog → Filter & Search"),
            line("2. View Course Details → Check Curriculum & Reviews", 16),
            line("3. Enroll in Course → Complete Payment", 16),
            line("4. Access Course → Watch Video Lectures", 16),
            line("5. Take Notes → Timestamp-based annotations", 16),
            line("6. Complete Assignments → Submit & Track", 16),
            line("7. Take Quizzes → Auto-graded assessments", 16),
            line("8. Join Live Sessions → Real-time interaction", 16),
            line("9. Ask Doubts → AI + Instructor help", 16),
            line("10. Earn Certificate → 100% completion + pass all tests", 16),
        ],
    },
    Slide::TitleAndContent {
        title: title("📚 Instructor Course Management"),
        body: &[
            lead("1. Create Course → Add Basic Information"),
            line("2. Build Curriculum → Add Modules & Lessons", 16),
            line("3. Upload Content → Videos, PDFs, Resources", 16),
            line("4. Create Assessments → Assignments & Quizzes", 16),
            line("5. Set up Batch → Assign Students & Schedule", 16),
            line("6. Publish Course → Students Can Enroll", 16),
            line("7. Monitor Progress → Analytics Dashboard", 16),
            line("8. Grade Submissions → Provide Feedback", 16),
            line("9. Respond to Doubts → Help Students", 16),
            line("10. Generate Reports → Track Performance", 16),
        ],
    },
    Slide::TitleAndContent {
        title: title("📝 Assessment System"),
        body: &[
            section("Assignments"),
            line("• File upload (PDF, DOC, ZIP)", 16),
            line("• Manual grading with rubrics", 16),
            line("• Feedback and comments", 16),
            line("• Late submission tracking", 16),
            section("Quizzes"),
            line("• Multiple choice, True/False, Coding problems", 16),
            line("• Auto-grading with instant feedback", 16),
            line("• Timed assessments", 16),
            line("• Multiple attempts tracking", 16),
        ],
    },
    Slide::TitleAndContent {
        title: title("💻 Technology Stack"),
        body: &[
            section("Frontend"),
            line("React 18 + TypeScript", 16),
            line("Vite Build Tool", 16),
            line("TailwindCSS + Radix UI", 16),
            section("Backend"),
            line("Node.js + Express", 16),
            line("MongoDB + Mongoose", 16),
            line("JWT Authentication", 16),
            section("Integrations"),
            line("Razorpay (Payments)", 16),
            line("Nodemailer (Email)", 16),
            line("reCAPTCHA (Security)", 16),
        ],
    },
    Slide::TitleAndContent {
        title: title("🆘 Support & Help"),
        body: &[
            line("Email: support@rassacademy.com", 20),
            line("Phone: +XX-XXXX-XXXX (Mon-Fri, 10 AM - 5 PM)", 18),
            line("Live Chat: Available on website (business hours)", 18),
            line("Support Tickets: Create from dashboard", 18),
            line("Help Center: Searchable knowledge base", 18),
            line("Community Forum: Peer support", 18),
            line("Video Tutorials: Step-by-step guides", 18),
            line("Social Media: @rassacademy", 18),
        ],
    },
    Slide::Blank {
        boxes: &[
            text_box("Thank You!", 200, 300, 600, 150, 48, true, Rgb::DARK_BLUE),
            text_box(
                "www.rassacademy.com | support@rassacademy.com",
                200,
                420,
                600,
                50,
                20,
                false,
                Rgb::LIGHT_BLUE,
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_twelve_slides() {
        assert_eq!(Deck::rass_academy().len(), 12);
    }

    #[test]
    fn test_first_and_last_slides_are_blank() {
        let deck = Deck::rass_academy();
        assert!(matches!(deck.slides[0], Slide::Blank { .. }));
        assert!(matches!(deck.slides[11], Slide::Blank { .. }));
        assert!(deck.slides[1..11]
            .iter()
            .all(|s| matches!(s, Slide::TitleAndContent { .. })));
    }

    #[test]
    fn test_slide_headings() {
        let deck = Deck::rass_academy();
        assert_eq!(deck.slides[0].heading(), "RASS ACADEMY");
        assert_eq!(deck.slides[1].heading(), "📖 Table of Contents");
        assert_eq!(deck.slides[11].heading(), "Thank You!");
    }

    #[test]
    fn test_slide_size_is_ten_by_seven_and_a_half_inches() {
        let deck = Deck::new();
        assert_eq!(deck.width, 9_144_000);
        assert_eq!(deck.height, 6_858_000);
    }

    #[test]
    fn test_title_box_geometry() {
        let deck = Deck::rass_academy();
        let Slide::Blank { boxes } = deck.slides[0] else {
            panic!("title slide should be blank");
        };
        assert_eq!(boxes[0].left, EMU_PER_INCH);
        assert_eq!(boxes[0].top, 2 * EMU_PER_INCH + EMU_PER_INCH / 2);
        assert_eq!(boxes[1].top, emu(350));
        assert_eq!(boxes[2].color, Rgb::ACCENT);
    }

    #[test]
    fn test_assessment_sections_are_bold() {
        let deck = Deck::rass_academy();
        let Slide::TitleAndContent { body, .. } = deck.slides[8] else {
            panic!("assessment slide should have a body");
        };
        let headers: Vec<_> = body.iter().filter(|l| l.bold).map(|l| l.text).collect();
        assert_eq!(headers, vec!["Assignments", "Quizzes"]);
    }

    #[test]
    fn test_lines_include_title() {
        let deck = Deck::rass_academy();
        let lines = deck.slides[10].lines();
        assert_eq!(lines[0], "🆘 Support & Help");
        assert_eq!(lines.len(), 9);
    }
}
