/// Build the instruction prompt for a transcript.
///
/// The prompt names the exact output keys (`task`, `assignedTo`, `deadline`),
/// states the "N/A" sentinel policy for missing values, asks for multiple
/// assignees to be listed together, and forbids any non-JSON commentary. The
/// transcript is embedded verbatim between `---` delimiter lines so the model
/// does not treat transcript content as instructions.
///
/// Deterministic: the same transcript always yields the same prompt.
pub fn build_extraction_prompt(transcript: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert at analyzing meeting transcripts. Your task is to identify \
         action items, including the task, the person it's assigned to, and the deadline.\n",
    );
    prompt.push_str(
        "From the following transcript, extract all action items and return them as a \
         valid JSON array of objects, where each object has the keys \"task\", \
         \"assignedTo\", and \"deadline\".\n",
    );
    prompt.push_str(
        "If you cannot find a value for a key, use \"N/A\". If a task is assigned to \
         multiple people, list them in the \"assignedTo\" field.\n",
    );
    prompt.push_str(
        "Be precise and concise in your extraction. Do not add any information that is \
         not present in the transcript.\n",
    );
    prompt.push_str(
        "Do not include any other text or explanation in your response, only the JSON \
         array.\n\n",
    );

    prompt.push_str("Transcript:\n");
    prompt.push_str("---\n");
    prompt.push_str(transcript);
    prompt.push_str("\n---\n");

    prompt
}
