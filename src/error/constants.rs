use super::const_error;

const_error!(
    #[error("M000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
);
const_error!(
    #[error("M001", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
);
const_error!(
    #[error("M002", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
);
const_error!(
    #[error("M003", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
);
const_error!(
    #[error("M004", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
);
const_error!(
    #[error("M005", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
);
const_error!(
    #[error("M006", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
);
const_error!(
    #[error("M007", "wrong username or password")]
    #[status(UNAUTHORIZED)]
    const WRONG_CREDENTIALS;
);
const_error!(
    #[error("M008", "not enough permissions")]
    #[status(FORBIDDEN)]
    const NOT_ENOUGH_PERMISSIONS;
);
const_error!(
    #[error("M009", "username already taken")]
    #[status(BAD_REQUEST)]
    const USERNAME_TAKEN;
);
const_error!(
    #[error("M010", "user not found")]
    #[status(NOT_FOUND)]
    const USER_NOT_FOUND;
);
const_error!(
    #[error("M011", "hackathon not found")]
    #[status(NOT_FOUND)]
    const HACKATHON_NOT_FOUND;
);
const_error!(
    #[error("M012", "team not found")]
    #[status(NOT_FOUND)]
    const TEAM_NOT_FOUND;
);
const_error!(
    #[error("M013", "exercise not found")]
    #[status(NOT_FOUND)]
    const EXERCISE_NOT_FOUND;
);
const_error!(
    #[error("M014", "exercise is not assigned to the team")]
    #[status(NOT_FOUND)]
    const TEAM_EXERCISE_NOT_FOUND;
);
const_error!(
    #[error("M015", "submission not found")]
    #[status(NOT_FOUND)]
    const SUBMISSION_NOT_FOUND;
);
const_error!(
    #[error("M016", "grade not found")]
    #[status(NOT_FOUND)]
    const GRADE_NOT_FOUND;
);
const_error!(
    #[error("M017", "team name exists")]
    #[status(BAD_REQUEST)]
    const DUPLICATE_TEAM_NAME;
);
const_error!(
    #[error("M018", "already in a team")]
    #[status(BAD_REQUEST)]
    const ALREADY_IN_TEAM;
);
const_error!(
    #[error("M019", "user is not a member of the team")]
    #[status(BAD_REQUEST)]
    const NO_SUCH_MEMBER;
);
const_error!(
    #[error("M020", "exercise already assigned to the team")]
    #[status(BAD_REQUEST)]
    const ALREADY_ASSIGNED;
);
const_error!(
    #[error("M021", "submission content is required")]
    #[status(BAD_REQUEST)]
    const MISSING_SUBMISSION_CONTENT;
);
const_error!(
    #[error("M022", "unsupported submission kind")]
    #[status(BAD_REQUEST)]
    const UNSUPPORTED_SUBMISSION_KIND;
);
const_error!(
    #[error("M023", "malformed multipart request")]
    #[status(BAD_REQUEST)]
    const MULTIPART_ERROR;
);
const_error!(
    #[error("M024", "missing file")]
    #[status(BAD_REQUEST)]
    const MISSING_FILE;
);
const_error!(
    #[error("M025", "storage error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const STORAGE_ERROR;
);
const_error!(
    #[error("M026", "message bus error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const NATS_ERROR;
);
const_error!(
    #[error("M027", "websocket error")]
    const WEBSOCKET_ERROR;
);
const_error!(
    #[error("M028", "authentication timeout")]
    const WEBSOCKET_AUTH_TIMEOUT;
);
const_error!(
    #[error("M029", "wrong message type")]
    const WEBSOCKET_WRONG_MESSAGE_TYPE;
);

pub(super) const AI_GRADING_FAILED_CODE: &str = "M030";
