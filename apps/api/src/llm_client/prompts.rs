// Cross-cutting prompt fragments. Task-specific prompts live next to the code
// that sends them.

/// System instruction for every call that expects a JSON reply.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT emit HTML inside any field.";

/// Tone requirement shared by the post-writing prompts.
pub const STUDENT_TONE: &str = "Tone: human-like, student friendly and non-robotic. \
    Use simple language; an English mix with Hindi or Bengali phrasing is fine.";
