use crate::prompt::{EmailRequest, ScheduleRequest};

/// Build the meeting invite prompt.
///
/// Fields are substituted verbatim. The labeled output format is a request to
/// the model; nothing downstream parses the reply against it.
pub fn build_schedule_prompt(request: &ScheduleRequest) -> String {
    let ScheduleRequest {
        title,
        date,
        time,
        duration,
        attendees,
        location,
        details,
        tone,
    } = request;
    let date = date.format("%Y-%m-%d");

    format!(
        "You are a smart personal assistant.\n\
\n\
Task: Create a professional scheduling message and a calendar entry description.\n\
\n\
Title: {title}\n\
Date: {date}\n\
Time: {time}\n\
Duration: {duration} minutes\n\
Attendees: {attendees}\n\
Location: {location}\n\
Details: {details}\n\
Tone: {tone}\n\
\n\
Please return output in this format:\n\
\n\
SUBJECT: ...\n\
BODY: ...\n\
CALENDAR: ...\n\
AGENDA:\n\
- point 1\n\
- point 2\n\
- point 3\n"
    )
}

/// Build the email draft prompt.
pub fn build_email_prompt(request: &EmailRequest) -> String {
    let EmailRequest {
        recipient_name,
        recipient_role,
        subject_hint,
        purpose,
        key_points,
        tone,
        length,
    } = request;

    format!(
        "You are an expert email-writing assistant.\n\
\n\
Draft a professional email using the details below.\n\
\n\
Recipient name: {recipient_name}\n\
Recipient role: {recipient_role}\n\
Subject idea: {subject_hint}\n\
Purpose: {purpose}\n\
Key points: {key_points}\n\
Tone: {tone}\n\
Desired length: {length}\n\
\n\
Please return output in this format:\n\
\n\
SUBJECT: ...\n\
BODY: ...\n\
ALTERNATIVE SUBJECTS:\n\
1. ...\n\
2. ...\n\
FOLLOW-UP SENTENCES:\n\
1. ...\n\
2. ...\n"
    )
}
