use std::sync::Arc;

use crate::classroom::ClassroomApi;
use crate::gemini::TextGenerator;
use crate::gmail::MailApi;

#[derive(Clone)]
pub struct AppState {
    pub classroom: Arc<dyn ClassroomApi>,
    pub mail: Arc<dyn MailApi>,
    pub generator: Arc<dyn TextGenerator>,
}
