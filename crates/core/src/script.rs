use crate::intent::classify_script_domain;
use crate::rules::{self, DEFAULT_WORD_BUDGET, WORD_BUDGETS};
use crate::select::truncate_utf16;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Target word count for a duration label; unknown labels get the "3 min" budget.
pub fn word_budget(duration: &str) -> u32 {
    WORD_BUDGETS
        .iter()
        .find(|(label, _)| *label == duration)
        .map(|(_, words)| *words)
        .unwrap_or(DEFAULT_WORD_BUDGET)
}

pub fn generate_video_script(topic: &str, duration: &str) -> String {
    let words = word_budget(duration);
    let points = rules::talking_points(classify_script_domain(topic))
        .map(|point| point.replace("{topic}", topic));

    let compact_tag: String = topic.split_whitespace().collect();
    let first_word = topic.split(' ').next().unwrap_or_default().to_lowercase();

    format!(
        r#"🎬 VIDEO SCRIPT: "{upper}"
Duration: {duration} (~{words} words)
{DIVIDER}

[HOOK / INTRO — 0:00-0:15]
"Did you know that {lower} is one of the most talked-about topics right now? In the next {duration}, I'm going to break down everything you need to know. Stay till the end — there's a game-changer I saved for last."

[INTRO ANIMATION + TITLE CARD]

{DIVIDER}
[MAIN POINT 1: Understanding the Basics]
"First, let's establish what we're actually talking about when we say {topic}. Many people have heard the term, but few truly understand what it means at its core.

{p0}

This is crucial because without this foundation, everything else we discuss won't make complete sense. Take a moment to let that sink in."

[B-ROLL: relevant visuals, animations, or demonstrations]

{DIVIDER}
[MAIN POINT 2: Why It Matters]
"Now that we understand the basics, let's talk about why {topic} matters to YOU specifically.

{p1}

The impact of this cannot be overstated. Whether you're a beginner or have years of experience, understanding this will change how you approach the subject entirely."

[CUT TO: Interview style or talking head]

{DIVIDER}
[MAIN POINT 3: Actionable Steps]
"So what can you actually DO with this information? Here's the practical part:

Step 1: {p2}
Step 2: Start applying it consistently — even 10 minutes a day makes a difference.
Step 3: Track your progress and iterate based on what works.

{p3}

The key is to start TODAY. Not tomorrow, not next week."

[SCREEN RECORDING or DEMO if applicable]

{DIVIDER}
[CALL TO ACTION]
"Here's your challenge: Take ONE thing from this video and implement it today. Just one. Drop a comment below telling me which point resonated most with you.

If you found this valuable, hit that like button — it really helps more people find this content. And if you want more videos like this, subscribe and hit the notification bell so you never miss an update."

{DIVIDER}
[OUTRO]
"That wraps up today's video on {topic}. Remember: {p4}

Until next time, keep learning, keep growing, and I'll see you in the next one. Take care!"

[END SCREEN: 20 seconds with subscribe button and video recommendations]

{DIVIDER}
📋 PRODUCTION NOTES:
• Thumbnail: Close-up face + bold text "{thumbnail}"
• Tags: #{compact_tag} #tutorial #howto #{first_word}
• Best upload time: Tuesday-Thursday, 2-4 PM EST
• Description: First 150 chars should contain main keyword"#,
        upper = topic.to_uppercase(),
        lower = topic.to_lowercase(),
        p0 = points[0],
        p1 = points[1],
        p2 = points[2],
        p3 = points[3],
        p4 = points[4],
        thumbnail = truncate_utf16(topic, 20),
    )
}
