use once_cell::sync::Lazy;
use regex::Regex;

use crate::intent::{classify_english, classify_science};
use crate::models::{EnglishBranch, HomeworkSolution, ScienceBranch, Step, Subject};

// ASCII digits only; `\d` would also accept other scripts' digits.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid number regex"));

const DEFAULT_NUMBERS: [f64; 2] = [10.0, 5.0];

pub fn generate_homework_solution(question: &str, subject: Subject) -> HomeworkSolution {
    match subject {
        Subject::Math => solve_math(question),
        Subject::Science => solve_science(question, classify_science(question)),
        Subject::History => solve_history(question),
        Subject::English => solve_english(question, classify_english(question)),
        Subject::General => solve_general(question),
    }
}

/// Numeric literals in the question, or `[10, 5]` when there are none.
pub fn extract_numbers(question: &str) -> Vec<f64> {
    let numbers = NUMBER
        .find_iter(question)
        .filter_map(|found| found.as_str().parse::<f64>().ok())
        .collect::<Vec<_>>();

    if numbers.is_empty() {
        DEFAULT_NUMBERS.to_vec()
    } else {
        numbers
    }
}

/// Shortest round-trip digits; exponent form outside `[1e-6, 1e21)` with an explicit
/// sign, matching how stored homework rendered its numbers.
pub fn render_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{value:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        }
    } else {
        value.to_string()
    }
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|term| term.to_string()).collect()
}

fn solve_math(question: &str) -> HomeworkSolution {
    let values = extract_numbers(question)
        .iter()
        .map(|value| render_number(*value))
        .collect::<Vec<_>>()
        .join(", ");

    HomeworkSolution {
        steps: [
            Step::new(
                "📖 Read and Understand",
                format!("Carefully read the problem: \"{question}\"\n\nIdentify: What is given? What are we solving for? Are there any constraints or special conditions?"),
            ),
            Step::new(
                "🔍 Identify the Type",
                format!("Based on the problem structure, this appears to involve mathematical operations with the values: {values}.\n\nDetermine which formula or method applies: arithmetic, algebra, geometry, or calculus."),
            ),
            Step::new(
                "✏️ Set Up the Equation",
                format!("Let's define our variables:\n• Let x = the unknown value we're solving for\n• Given values: {values}\n\nWrite out the mathematical relationship between these values."),
            ),
            Step::new(
                "🧮 Solve Step by Step",
                "Step 1: Isolate the variable\nStep 2: Apply inverse operations\nStep 3: Simplify both sides\nStep 4: Verify the solution satisfies the original equation",
            ),
            Step::new(
                "✅ Check Your Answer",
                "Always verify by substituting your answer back into the original equation.\n\nDoes it make logical sense? Is the answer within expected bounds?\nUnits check: make sure your answer has the correct units if applicable.",
            ),
        ],
        summary: "To solve this math problem, identify the type of problem (arithmetic/algebra/geometry), set up the appropriate equation, solve systematically, and verify your answer by substituting back into the original.".to_string(),
        key_terms: terms(&["Variable", "Equation", "Solution", "Coefficient", "Constant", "Like terms"]),
        extra_detail: "📐 DEEPER UNDERSTANDING:\n\nCommon math strategies:\n1. Draw a diagram when dealing with geometry\n2. Make a table for pattern-based problems\n3. Work backwards for complex word problems\n4. Estimate first to sanity-check your answer\n5. Factor when you see expressions that can be simplified\n\n💡 Memory Tip: PEMDAS/BODMAS — always follow order of operations:\nParentheses → Exponents → Multiplication/Division → Addition/Subtraction".to_string(),
    }
}

fn solve_science(question: &str, branch: ScienceBranch) -> HomeworkSolution {
    let topic = branch.label();

    let principles = match branch {
        ScienceBranch::Physics => "Newton's Laws, Conservation of Energy, and Thermodynamics form the foundation. Force = mass × acceleration (F=ma) is often the starting point for motion problems.",
        ScienceBranch::Chemistry => "The Periodic Table organizes elements by atomic number. Chemical bonds (ionic, covalent, metallic) hold atoms together. Conservation of mass: matter is neither created nor destroyed.",
        ScienceBranch::Biology => "Cells are the basic unit of life. DNA carries genetic information. Evolution explains biodiversity. Photosynthesis and respiration are opposite but complementary processes.",
        ScienceBranch::General => "Scientific laws describe consistent patterns in nature. Theories explain why these patterns exist. Both are supported by extensive evidence.",
    };

    let key_terms = match branch {
        ScienceBranch::Physics => terms(&["Force", "Mass", "Acceleration", "Velocity", "Energy", "Work", "Power"]),
        ScienceBranch::Chemistry => terms(&["Atom", "Molecule", "Element", "Compound", "Reaction", "Bond", "Valence"]),
        ScienceBranch::Biology | ScienceBranch::General => {
            terms(&["Cell", "Organism", "Gene", "Ecosystem", "Evolution", "Metabolism"])
        }
    };

    HomeworkSolution {
        steps: [
            Step::new(
                format!("🔬 Core Concept ({topic})"),
                format!("This question relates to {topic}. The fundamental principle at work here involves understanding how natural phenomena follow predictable laws and patterns.\n\nThe scientific method guides us: Observe → Hypothesize → Experiment → Analyze → Conclude."),
            ),
            Step::new("📚 Key Principles", principles),
            Step::new(
                "🧪 Analysis",
                format!("Applying these principles to your question:\n\"{question}\"\n\nBreak the problem into parts:\n• What phenomenon is being described?\n• What variables are involved?\n• How do they relate to each other?"),
            ),
            Step::new(
                "💡 Explanation",
                "The answer involves understanding the cause-and-effect relationship in this scenario.\n\nKey factors:\n1. The initial conditions and what triggers the process\n2. How energy or matter is transformed\n3. The observable outcome and how we can measure it",
            ),
            Step::new(
                "🌟 Real-World Application",
                "This concept appears in everyday life:\n• Scientists use this to explain natural phenomena\n• Engineers apply this in designing systems\n• We observe this in nature constantly\n\nUnderstanding this helps predict and explain events in the physical world.",
            ),
        ],
        summary: format!("This {topic} question requires understanding the underlying scientific principles, analyzing the given conditions, and applying the relevant laws to reach a logical conclusion."),
        key_terms,
        extra_detail: "🔭 ADVANCED CONCEPTS:\n\nThis topic connects to broader scientific themes:\n• Systems thinking: how parts interact to create emergent properties\n• Scale: processes work differently at quantum, molecular, and macro scales\n• Equilibrium: natural systems tend toward balanced states\n\n📊 Study Strategy:\n1. Understand concepts before memorizing formulas\n2. Draw diagrams to visualize processes\n3. Connect new knowledge to things you already know\n4. Practice with different types of problems".to_string(),
    }
}

fn solve_history(question: &str) -> HomeworkSolution {
    HomeworkSolution {
        steps: [
            Step::new(
                "📅 Historical Context",
                format!("To understand \"{question}\", we need to place it in its proper historical context.\n\nHistory is shaped by:\n• Political forces and power structures\n• Economic conditions and trade\n• Social movements and cultural shifts\n• Technological innovations\n• Geographic factors"),
            ),
            Step::new(
                "🌍 Key Causes & Background",
                "Historical events rarely happen in isolation. They're the result of complex, interconnected causes:\n\n1. Long-term causes: Underlying tensions that built over years or decades\n2. Short-term causes: Immediate triggers that set events in motion\n3. Individual agency: The role of specific leaders and decisions\n4. Structural factors: Social, economic, political systems at play",
            ),
            Step::new(
                "📊 Analysis of Events",
                "When analyzing this historical topic:\n\n• Primary sources: Diaries, letters, official documents from the period\n• Secondary sources: Historians' interpretations and analysis\n• Multiple perspectives: Different groups experienced events differently\n• Bias awareness: Consider who wrote the history and why",
            ),
            Step::new(
                "⚖️ Significance & Impact",
                "Why does this matter? Historical events have lasting consequences:\n\n• Immediate effects: What changed directly as a result?\n• Long-term effects: How did this shape the future?\n• Global impact: How did this affect other regions?\n• Legacy: How do we remember and interpret this today?",
            ),
            Step::new(
                "📝 Forming Your Argument",
                "A strong history answer includes:\n✓ Clear thesis statement\n✓ Evidence from primary/secondary sources\n✓ Analysis (don't just describe — explain WHY)\n✓ Counter-arguments acknowledged\n✓ Conclusion that answers the question directly",
            ),
        ],
        summary: "History requires understanding context, causes, and consequences. Analyze events through multiple perspectives, use evidence to support arguments, and consider both short-term and long-term significance.".to_string(),
        key_terms: terms(&[
            "Primary Source",
            "Secondary Source",
            "Chronology",
            "Causation",
            "Consequence",
            "Bias",
            "Historiography",
        ]),
        extra_detail: "🏛️ DEEPER HISTORICAL THINKING:\n\nHistorical thinking skills:\n1. Chronological reasoning: Understanding change over time\n2. Contextualization: Situating events in their historical moment\n3. Comparison: Analyzing similarities and differences across time/place\n4. Causation: Explaining why events happened\n5. Argumentation: Using evidence to make historical claims\n\n📚 Research Tips:\n• Start with encyclopedias for overview, then go to primary sources\n• Look for opposing historical interpretations\n• Use databases like JSTOR for academic articles".to_string(),
    }
}

fn solve_english(question: &str, branch: EnglishBranch) -> HomeworkSolution {
    let framing = match branch {
        EnglishBranch::Grammar => "This is a grammar question. We need to identify the grammatical structure and rules at play.",
        EnglishBranch::Writing => "This is a writing task. We need to organize thoughts, develop arguments, and communicate clearly.",
        EnglishBranch::Literature => "This involves literary analysis. We need to examine text for meaning, themes, and devices.",
        EnglishBranch::General => "This English question requires careful reading and thoughtful response.",
    };

    let (focus_title, focus_content) = match branch {
        EnglishBranch::Grammar => (
            "📏 Grammar Rules",
            "Key grammar principles:\n\n• Subject-Verb Agreement: The verb must match its subject in number\n• Tense Consistency: Maintain consistent tense throughout\n• Pronoun Reference: Pronouns must clearly refer to their antecedents\n• Punctuation: Use commas, semicolons, and colons correctly\n• Active vs. Passive Voice: Active voice is generally clearer and more direct",
        ),
        EnglishBranch::Writing => (
            "✍️ Writing Structure",
            "Effective writing structure:\n\n• Introduction: Hook + Background + Thesis statement\n• Body Paragraphs: Topic sentence + Evidence + Analysis + Transition\n• Conclusion: Restate thesis (not copy) + Synthesis + Closing thought\n\nEach paragraph should have ONE main idea, supported by evidence and your analysis.",
        ),
        EnglishBranch::Literature | EnglishBranch::General => (
            "🔍 Literary Analysis",
            "Literary analysis framework:\n\n• Plot: What happens (but don't just summarize!)\n• Character: How and why characters change\n• Theme: Central message or insight about human experience\n• Setting: How place/time shapes the story\n• Literary devices: Metaphor, simile, symbolism, irony, foreshadowing",
        ),
    };

    let involves = match branch {
        EnglishBranch::Grammar => "grammar rules and language mechanics",
        EnglishBranch::Writing => "structured writing and argumentation",
        EnglishBranch::Literature => "literary analysis and interpretation",
        EnglishBranch::General => "language skills and communication",
    };

    let key_terms = match branch {
        EnglishBranch::Grammar => terms(&["Subject", "Predicate", "Clause", "Phrase", "Modifier", "Antecedent"]),
        EnglishBranch::Writing => terms(&["Thesis", "Argument", "Evidence", "Analysis", "Transition", "Synthesis"]),
        EnglishBranch::Literature | EnglishBranch::General => {
            terms(&["Theme", "Motif", "Metaphor", "Symbolism", "Protagonist", "Narrative"])
        }
    };

    HomeworkSolution {
        steps: [
            Step::new(
                "📖 Understanding the Question",
                format!("Let's analyze what's being asked: \"{question}\"\n\n{framing}"),
            ),
            Step::new(focus_title, focus_content),
            Step::new(
                "💡 Application",
                "Applying these concepts to your question:\n\nRemember the key principle: In English, clarity and precision are paramount. Every word choice matters. Read your work aloud — if it sounds awkward, revise it.\n\nStrong English answers demonstrate:\n1. Understanding of the question\n2. Relevant textual evidence\n3. Thoughtful analysis and interpretation\n4. Correct grammar and mechanics",
            ),
            Step::new(
                "✏️ Writing Tips",
                "Essential writing advice:\n\n1. Show, don't tell: Use specific examples rather than vague statements\n2. Vary sentence structure: Mix short, punchy sentences with longer, complex ones\n3. Strong vocabulary: Choose precise words over general ones\n4. Transitions: Connect ideas with transitional words and phrases\n5. Revision: First drafts are never perfect — revise, revise, revise!",
            ),
            Step::new(
                "🎯 Final Check",
                "Before submitting, check:\n☐ Does it answer the actual question asked?\n☐ Is the grammar correct?\n☐ Are spelling and punctuation right?\n☐ Is the structure clear and logical?\n☐ Have you cited evidence where needed?\n☐ Does the conclusion wrap up effectively?",
            ),
        ],
        summary: format!("This English question involves {involves}. Apply the relevant principles systematically for a strong response."),
        key_terms,
        extra_detail: "📚 ADVANCED ENGLISH SKILLS:\n\nLevels of reading comprehension:\n1. Literal: What does the text say?\n2. Inferential: What does the text imply?\n3. Critical: How does the text construct meaning?\n4. Creative: How can we apply or extend the text's ideas?\n\n✍️ Writing Process:\nPrewrite → Draft → Revise (content) → Edit (language) → Proofread (errors)\n\nNever skip the revision stage — it's where good writing becomes great writing.".to_string(),
    }
}

fn solve_general(question: &str) -> HomeworkSolution {
    HomeworkSolution {
        steps: [
            Step::new(
                "🎯 Understanding the Question",
                format!("Let's break down the question: \"{question}\"\n\nKey steps for any homework problem:\n1. Read the question carefully — what exactly is being asked?\n2. Identify the subject area and relevant concepts\n3. Recall related knowledge you already have\n4. Plan your approach before diving in"),
            ),
            Step::new(
                "🔍 Research & Analysis",
                "Gather relevant information:\n\n• What do you already know about this topic?\n• What key terms or concepts appear in the question?\n• Are there similar problems you've solved before?\n• What sources would have reliable information on this?\n\nOrganize your thoughts before writing — a brief outline saves time.",
            ),
            Step::new(
                "💡 Developing Your Answer",
                "Build a comprehensive response:\n\n1. Start with the core answer or main point\n2. Support it with evidence, examples, or reasoning\n3. Explain the significance or implications\n4. Address any exceptions or nuances\n5. Connect to broader themes or concepts\n\nDepth matters: go beyond surface-level answers.",
            ),
            Step::new(
                "🔗 Making Connections",
                "The best answers connect ideas:\n\n• How does this relate to other things you've learned?\n• Are there real-world examples that illustrate this?\n• What are the practical implications?\n• How might different people view this question differently?\n\nShowing these connections demonstrates deep understanding.",
            ),
            Step::new(
                "✅ Review & Refine",
                "Before finalizing:\n\n☐ Does my answer directly address the question?\n☐ Have I supported my points with evidence?\n☐ Is my reasoning clear and logical?\n☐ Is my presentation clean and organized?\n☐ Have I proofread for errors?\n\nQuality over quantity: a focused, well-reasoned answer beats a rambling one.",
            ),
        ],
        summary: "This question requires careful analysis, application of relevant knowledge, and clear communication of your reasoning. Break it into parts, address each systematically, and support your answer with evidence.".to_string(),
        key_terms: terms(&["Analysis", "Synthesis", "Evaluation", "Evidence", "Argument", "Conclusion"]),
        extra_detail: "🎓 STUDY STRATEGIES:\n\nEffective learning techniques:\n1. Active recall: Test yourself instead of just re-reading\n2. Spaced repetition: Review material over multiple sessions\n3. Feynman Technique: Explain concepts in simple terms\n4. Mind mapping: Visual organization of related ideas\n5. Pomodoro Method: 25 minutes focused work, 5 minute break\n\n💬 Ask for help:\nTeachers, tutors, study groups, and online resources are all valuable.\nDon't struggle alone — seeking help is a sign of intelligence, not weakness!".to_string(),
    }
}
