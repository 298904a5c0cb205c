use plantar_map::{
    Effect, Emitter, PressureProps, ShellEvent, ShellLogic, ShellModel,
};

pub(crate) const ROOT_ID: &str = "feet-pressure";

#[cfg_attr(test, mockall::automock)]
pub(crate) trait FeedDependency {
    fn on_startup(&self) -> Effect;
}

/// Shell fixture whose startup feed is injected, so tests control exactly
/// which events reach the runtime.
pub(crate) struct MockFeedShell {
    pub(crate) feed: Box<dyn FeedDependency + Send>,
}

impl ShellLogic for MockFeedShell {
    fn init(&self, model: ShellModel) -> (ShellModel, Effect) {
        (model, self.feed.on_startup())
    }

    fn update(&self, event: ShellEvent, model: &ShellModel) -> (ShellModel, Effect) {
        match event {
            ShellEvent::ReplaceState(state) => {
                let new_model = ShellModel {
                    state,
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
            ShellEvent::ReadingsArrived(readings) => {
                let new_model = ShellModel {
                    readings,
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
        }
    }

    fn view(&self, model: &ShellModel, emitter: &Emitter) -> PressureProps {
        let emitter = emitter.clone();
        PressureProps {
            root_id: Some(ROOT_ID.to_string()),
            sensor_data: model.readings.clone(),
            set_props: Box::new(move |state| {
                emitter.emit(ShellEvent::ReplaceState(state));
            }),
        }
    }
}
